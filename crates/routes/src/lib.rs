mod carousel;
mod components;
mod contact;
mod forms;
mod health;
mod home;
mod newsletter;
mod prayer_times;
mod routes;
mod startup;

use axum::http::{StatusCode, Uri};
use tracing::warn;

// re-exports
pub use routes::{get_router, routes_path};
pub use startup::{Application, ApplicationBuilder};

async fn handle_404(uri: Uri) -> StatusCode {
    warn!("Route not found: {}", uri);
    StatusCode::NOT_FOUND
}
