mod codegen;
mod parser;

pub(crate) use codegen::impl_into_response;
