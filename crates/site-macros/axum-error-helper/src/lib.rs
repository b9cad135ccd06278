use proc_macro::TokenStream;
use syn::ItemEnum;

mod debug_chain;
mod into_error_response;

/// # Implements `axum::response::IntoResponse`
///
/// Logs the error through `tracing` and answers with an HTML error fragment
/// (`site_macros::render_error`) carrying the variant's status code.
/// Variants without `#[status(..)]` answer `500 Internal Server Error`.
///
/// The status expression may use the variant's fields, bound as `_0, _1, ..`
/// for tuple variants and by name for struct variants.
///
/// # Usage
///
/// ```rs
/// #[derive(IntoErrorResponse)]
/// pub enum Error {
///     #[status(StatusCode::UNPROCESSABLE_ENTITY)]
///     MissingField(String),
///     #[status(_0.status())]
///     InvalidForm(#[from] FormRejection),
/// }
/// ```
#[proc_macro_derive(IntoErrorResponse, attributes(status))]
pub fn error_macro(item: TokenStream) -> TokenStream {
    let mut input: ItemEnum = match syn::parse(item) {
        Ok(input) => input,
        Err(e) => return e.to_compile_error().into(),
    };
    crate::into_error_response::impl_into_response(&mut input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// # Implements `std::fmt::Debug`
///
/// Prints the error followed by its `source()` chain, one cause per line:
/// ```text
/// prayer time provider is unreachable
///   + error sending request
///     + operation timed out
/// ```
#[proc_macro_derive(DebugChain)]
pub fn debug_chain_macro(item: TokenStream) -> TokenStream {
    let input: ItemEnum = match syn::parse(item) {
        Ok(input) => input,
        Err(e) => return e.to_compile_error().into(),
    };
    crate::debug_chain::impl_debug_chain(&input).into()
}
