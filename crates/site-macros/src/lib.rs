pub use axum_error_helper::{DebugChain, IntoErrorResponse};
use axum::http::StatusCode;
use maud::{Markup, html};

/// Fragment swapped into the page in place of the form or widget that failed.
pub fn render_error(status: StatusCode, message: &str) -> Markup {
    html! {
        div class="p-4 bg-red-50 border border-red-200 rounded-lg text-red-800" role="alert"
            data-status=(status.as_u16()) {
            p class="font-semibold" { "Something went wrong." }
            p class="text-sm" { (message) }
        }
    }
}

pub fn write_error_chain(
    f: &mut core::fmt::Formatter,
    error: &dyn core::error::Error,
) -> core::fmt::Result {
    writeln!(f, "{error}")?;
    let mut cause = error.source();
    let mut depth = 1;

    while let Some(err) = cause {
        writeln!(f, "{:>width$}+ {err}", "", width = depth * 2)?;
        cause = err.source();
        depth += 1;
    }
    Ok(())
}
