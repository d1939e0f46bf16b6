//! Derive macros for `pdfilter`.
//!
//! This crate generates the traversal code behind `#[derive(PersonalData)]`. It:
//! - reads `#[pdfilter(...)]` container and field attributes
//! - emits a `PersonalData` implementation that rebuilds the value through a
//!   `FilterMapper`
//!
//! It does **not** hold masks, patterns or name lists. Those live in the
//! `pdfilter` crate and are applied at runtime.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Result};

mod attr;
mod derive_enum;
mod derive_struct;
mod generics;
mod strategy;
mod transform;
use attr::{parse_container_options, ContainerOptions};
use derive_enum::derive_enum;
use derive_struct::derive_struct;
use generics::BoundSet;

/// Derives `pdfilter::PersonalData` for structs and enums.
///
/// The generated implementation rebuilds the value field by field, in
/// declaration order. The type must also implement `Clone`.
///
/// # Container Attributes
///
/// - `#[pdfilter(nofilter)]` - The whole value passes through verbatim. Use this for types
///   that never carry personal data but appear inside filtered records.
///
/// # Field Attributes
///
/// - **No annotation**: The field is walked. A named field whose name (underscores removed,
///   compared case-insensitively) is in the filter's personal data names and whose value is
///   text is replaced by the mask as a whole. Every other field is filtered recursively.
///
/// - `#[pdfilter(nofilter)]`: The field is cloned verbatim. No name check, no pattern scan.
///   The field still counts when deciding whether the whole value is zero, so its type
///   must implement `PersonalData`. Wrap external types in a `#[pdfilter(nofilter)]` newtype.
///
/// - `#[pdfilter(rename = "name")]`: Uses `name` instead of the field identifier when
///   checking the personal data names. Also makes tuple fields name-checked.
///
/// Options can be combined: `#[pdfilter(nofilter, rename = "id")]`.
///
/// Struct fields without `pub` visibility are not copied: the filtered value holds
/// `Default::default()` for them, even when they are marked `nofilter`. Enum variant
/// fields are always accessible.
///
/// Unions are rejected at compile time.
#[proc_macro_derive(PersonalData, attributes(pdfilter))]
pub fn derive_personal_data(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the pdfilter crate root.
///
/// Handles crate renaming (e.g., `my_filter = { package = "pdfilter", ... }`)
/// and internal usage (when derive is used inside the pdfilter crate itself).
fn crate_root() -> TokenStream {
    match crate_name("pdfilter") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::pdfilter },
    }
}

fn crate_path(item: &str) -> TokenStream {
    let root = crate_root();
    let item_ident = format_ident!("{}", item);
    quote! { #root::#item_ident }
}

/// Method bodies and bounds for one derived type.
pub(crate) struct DeriveOutput {
    /// Body of `filter_with`. Has `self` and `mapper` in scope.
    pub(crate) filter_body: TokenStream,
    /// Body of `is_zero`.
    pub(crate) zero_body: TokenStream,
    pub(crate) bounds: BoundSet,
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        attrs,
        ..
    } = input;

    let ContainerOptions { nofilter } = parse_container_options(&attrs)?;

    let crate_root = crate_root();

    let derive_output = match &data {
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "`PersonalData` cannot be derived for unions",
            ));
        }
        _ if nofilter => DeriveOutput {
            filter_body: quote! { ::core::clone::Clone::clone(self) },
            zero_body: quote! { false },
            bounds: BoundSet::default(),
        },
        Data::Struct(data) => derive_struct(data, &generics)?,
        Data::Enum(data) => derive_enum(&ident, data, &generics)?,
    };

    let mut bounded_generics = derive_output.bounds.apply(generics);
    // Parameters that only appear behind `PhantomData` collect no bounds.
    bounded_generics
        .make_where_clause()
        .predicates
        .push(syn::parse_quote!(Self: ::core::clone::Clone));
    let (impl_generics, ty_generics, where_clause) = bounded_generics.split_for_impl();
    let filter_body = &derive_output.filter_body;
    let zero_body = &derive_output.zero_body;

    Ok(quote! {
        impl #impl_generics #crate_root::PersonalData for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn filter_with<__PdfilterMapper: #crate_root::FilterMapper>(
                &self,
                mapper: &__PdfilterMapper,
            ) -> Self {
                #filter_body
            }

            #[allow(unused_variables)]
            fn is_zero(&self) -> bool {
                #zero_body
            }
        }
    })
}
