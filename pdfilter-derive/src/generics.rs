//! Generic type parameter handling and trait bound management.
//!
//! Bounds are added only for generics that actually appear in a field, and
//! only the bound that field's strategy needs:
//!
//! - walked, name-checked and `nofilter` fields: `PersonalData`
//! - reset fields: `PersonalData + Default`
//!
//! ## PhantomData Handling
//!
//! `PhantomData<T>` fields are skipped when collecting generics:
//!
//! ```ignore
//! struct TypedId<T> {
//!     pub id: String,
//!     pub marker: PhantomData<T>,  // T should NOT require PersonalData
//! }
//! ```

use proc_macro2::TokenStream;
use syn::{parse_quote, Ident};

use crate::crate_path;

pub(crate) fn collect_generics_from_type(
    ty: &syn::Type,
    generics: &syn::Generics,
    result: &mut Vec<Ident>,
) {
    match ty {
        syn::Type::Path(path) => {
            let Some(segment) = path.path.segments.last() else {
                return;
            };
            if segment.ident == "PhantomData" {
                return;
            }

            if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                for arg in &args.args {
                    if let syn::GenericArgument::Type(inner_ty) = arg {
                        collect_generics_from_type(inner_ty, generics, result);
                    }
                }
            }

            for param in generics.type_params() {
                if segment.ident == param.ident && !result.iter().any(|g| g == &param.ident) {
                    result.push(param.ident.clone());
                }
            }
        }
        syn::Type::Array(array) => collect_generics_from_type(&array.elem, generics, result),
        syn::Type::Slice(slice) => collect_generics_from_type(&slice.elem, generics, result),
        syn::Type::Paren(paren) => collect_generics_from_type(&paren.elem, generics, result),
        syn::Type::Group(group) => collect_generics_from_type(&group.elem, generics, result),
        syn::Type::Tuple(tuple) => {
            for elem in &tuple.elems {
                collect_generics_from_type(elem, generics, result);
            }
        }
        _ => {}
    }
}

/// Generic parameters that need bounds, grouped by the bound they need.
#[derive(Default)]
pub(crate) struct BoundSet {
    pub(crate) filtered: Vec<Ident>,
    pub(crate) defaulted: Vec<Ident>,
}

impl BoundSet {
    /// Adds the collected bounds to the matching type parameters.
    pub(crate) fn apply(&self, mut generics: syn::Generics) -> syn::Generics {
        let personal_data = crate_path("PersonalData");
        add_bounds(&mut generics, &self.filtered, &personal_data);
        add_bounds(&mut generics, &self.defaulted, &personal_data);
        add_bounds(
            &mut generics,
            &self.defaulted,
            &quote::quote! { ::core::default::Default },
        );
        generics
    }
}

fn add_bounds(generics: &mut syn::Generics, used_generics: &[Ident], bound: &TokenStream) {
    for param in generics.type_params_mut() {
        if used_generics.iter().any(|g| g == &param.ident) {
            param.bounds.push(parse_quote!(#bound));
        }
    }
}
