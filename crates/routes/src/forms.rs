use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use site_macros::{DebugChain, IntoErrorResponse};

/// Why a newsletter or contact submission was refused.
#[derive(thiserror::Error, IntoErrorResponse, DebugChain)]
pub enum SubmissionError {
    #[error("{0}")]
    #[status(StatusCode::UNPROCESSABLE_ENTITY)]
    MissingField(String),
    #[error("The submitted form could not be read.")]
    #[status(_0.status())]
    InvalidForm(#[from] FormRejection),
}
