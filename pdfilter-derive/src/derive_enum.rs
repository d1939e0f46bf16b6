//! Enum-specific `PersonalData` derivation.
//!
//! Each variant gets a match arm that rebinds its fields and rebuilds the
//! variant. Variant fields are always accessible, so they are never reset.
//! Enums have no zero value: every variant is walked.

use proc_macro2::Ident;
use quote::quote;
use syn::{DataEnum, Result};

use crate::{
    crate_root,
    generics::BoundSet,
    transform::{rebuild_fields, DeriveContext, FieldsRebuild},
    DeriveOutput,
};

pub(crate) fn derive_enum(
    name: &Ident,
    data: &DataEnum,
    generics: &syn::Generics,
) -> Result<DeriveOutput> {
    let crate_root = crate_root();
    let mut bounds = BoundSet::default();
    let mut ctx = DeriveContext {
        generics,
        crate_root: &crate_root,
        bounds: &mut bounds,
    };

    let mut arms = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        let variant_ident = &variant.ident;
        let FieldsRebuild {
            pattern,
            transforms,
            ..
        } = rebuild_fields(&mut ctx, &variant.fields, &quote! { #name::#variant_ident }, false)?;

        arms.push(quote! {
            #pattern => {
                #(#transforms)*
                #pattern
            }
        });
    }

    let filter_body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#arms)*
            }
        }
    };

    Ok(DeriveOutput {
        filter_body,
        zero_body: quote! { false },
        bounds,
    })
}
