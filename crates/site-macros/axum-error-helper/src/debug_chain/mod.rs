use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ItemEnum;

pub(super) fn impl_debug_chain(original_enum: &ItemEnum) -> TokenStream2 {
    let enum_ident = &original_enum.ident;
    let (impl_generics, ty_generics, where_clause) = original_enum.generics.split_for_impl();

    quote! {
        impl #impl_generics ::std::fmt::Debug for #enum_ident #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::site_macros::write_error_chain(f, self)
            }
        }
    }
}
