//! Struct-specific `PersonalData` derivation.
//!
//! The generated `filter_with` destructures `self`, rebinds every field to its
//! filtered copy and rebuilds the struct. `is_zero` holds when every field
//! that takes part in filtering is zero.

use quote::quote;
use syn::{DataStruct, Result};

use crate::{
    crate_root,
    generics::BoundSet,
    transform::{rebuild_fields, zero_conjunction, DeriveContext, FieldsRebuild},
    DeriveOutput,
};

pub(crate) fn derive_struct(data: &DataStruct, generics: &syn::Generics) -> Result<DeriveOutput> {
    let crate_root = crate_root();
    let mut bounds = BoundSet::default();
    let mut ctx = DeriveContext {
        generics,
        crate_root: &crate_root,
        bounds: &mut bounds,
    };

    let FieldsRebuild {
        pattern,
        transforms,
        zero_checks,
    } = rebuild_fields(&mut ctx, &data.fields, &quote! { Self }, true)?;
    let zero = zero_conjunction(&zero_checks);

    Ok(DeriveOutput {
        filter_body: quote! {
            let #pattern = self;
            #(#transforms)*
            #pattern
        },
        zero_body: quote! {
            let #pattern = self;
            #zero
        },
        bounds,
    })
}
