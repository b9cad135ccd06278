use deluxe::ExtractAttributes;
use syn::{Expr, Fields, Ident, ItemEnum, Variant};

/// Represents:
/// ```rs
/// #[status(StatusCode::XYZ)]
/// ```
#[derive(ExtractAttributes, Debug)]
#[deluxe(attributes(status), default)]
pub struct StatusAttr(pub Expr);

impl Default for StatusAttr {
    fn default() -> Self {
        Self(syn::parse_quote! { ::axum::http::StatusCode::INTERNAL_SERVER_ERROR })
    }
}

#[derive(Debug)]
pub struct VariantMeta {
    pub ident: Ident,
    pub fields: Fields,
    pub status: Expr,
}

pub fn parse_enum(original_enum: &mut ItemEnum) -> syn::Result<Vec<VariantMeta>> {
    original_enum
        .variants
        .iter_mut()
        .map(parse_variant)
        .collect()
}

fn parse_variant(variant: &mut Variant) -> syn::Result<VariantMeta> {
    let StatusAttr(status) = deluxe::extract_attributes(variant).map_err(|e| {
        syn::Error::new_spanned(&variant.ident, format!("invalid #[status(..)]: {e}"))
    })?;

    Ok(VariantMeta {
        ident: variant.ident.clone(),
        fields: variant.fields.clone(),
        status,
    })
}
