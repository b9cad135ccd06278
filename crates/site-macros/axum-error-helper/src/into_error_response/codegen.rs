use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Fields, Ident, ItemEnum};

use crate::into_error_response::parser::parse_enum;

fn variant_pat(enum_ident: &Ident, ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        // named fields are bound by their own names
        Fields::Named(fields) => {
            let bindings = fields.named.iter().map(|f| {
                let ident = &f.ident;
                quote! { #ident }
            });
            quote! { #enum_ident::#ident { #(#bindings),* } }
        }

        // tuple fields are bound as _0, _1, ...
        Fields::Unnamed(fields) => {
            let bindings = fields.unnamed.iter().enumerate().map(|(i, _)| {
                let ident = quote::format_ident!("_{}", i);
                quote! { #ident }
            });
            quote! { #enum_ident::#ident ( #(#bindings),* ) }
        }

        Fields::Unit => quote! { #enum_ident::#ident },
    }
}

pub(crate) fn impl_into_response(original_enum: &mut ItemEnum) -> syn::Result<TokenStream2> {
    let enum_ident = original_enum.ident.clone();
    let variants = parse_enum(original_enum)?;

    let match_arms = variants.iter().map(|v| {
        let pat = variant_pat(&enum_ident, &v.ident, &v.fields);
        let status = &v.status;

        quote! {
            #[allow(unused_variables)]
            #pat => #status,
        }
    });

    Ok(quote! {
        impl ::axum::response::IntoResponse for #enum_ident {
            fn into_response(self) -> ::axum::response::Response {
                let status_code: ::axum::http::StatusCode = match &self {
                    #(#match_arms)*
                };

                let message = self.to_string();

                if status_code.is_server_error() {
                    ::tracing::error!(exception.details = ?self, exception.message = %message);
                } else {
                    ::tracing::warn!(exception.details = ?self, exception.message = %message);
                }

                let body = ::site_macros::render_error(status_code, &message);

                ::axum::response::IntoResponse::into_response((status_code, body))
            }
        }
    })
}
