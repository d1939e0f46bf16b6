//! Shared field transformation logic for struct and enum derivation.

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{spanned::Spanned, Fields, LitStr, Result, Visibility};

use crate::{
    attr::parse_field_options,
    generics::collect_generics_from_type,
    strategy::{resolve_strategy, Strategy},
};

/// Accumulated state during field processing.
pub(crate) struct DeriveContext<'a> {
    pub(crate) generics: &'a syn::Generics,
    pub(crate) crate_root: &'a TokenStream,
    pub(crate) bounds: &'a mut crate::generics::BoundSet,
}

/// Tokens generated for a single field.
pub(crate) struct FieldTokens {
    /// Rebinds `binding` to the filtered value.
    pub(crate) transform: TokenStream,
    /// Zero test for the field.
    pub(crate) zero_check: TokenStream,
}

/// Generates the transform and zero test for a single field.
///
/// `binding` is a reference to the original field value.
///
/// ## Field Transformation Rules
///
/// | Strategy | Behavior |
/// |----------|----------|
/// | `Verbatim` | `Clone::clone` |
/// | `Reset` | `Default::default()` |
/// | `Named` | `filter_named` (mask on name match, walk otherwise) |
/// | `Walk` | `walk` |
pub(crate) fn generate_field_transform(
    ctx: &mut DeriveContext<'_>,
    ty: &syn::Type,
    binding: &Ident,
    span: Span,
    strategy: &Strategy,
) -> FieldTokens {
    let crate_root = ctx.crate_root;
    let zero_check = quote_spanned! { span =>
        #crate_root::PersonalData::is_zero(#binding)
    };

    match strategy {
        Strategy::Verbatim => {
            collect_generics_from_type(ty, ctx.generics, &mut ctx.bounds.filtered);
            FieldTokens {
                transform: quote_spanned! { span =>
                    let #binding = ::core::clone::Clone::clone(#binding);
                },
                zero_check,
            }
        }
        Strategy::Reset => {
            collect_generics_from_type(ty, ctx.generics, &mut ctx.bounds.defaulted);
            FieldTokens {
                transform: quote_spanned! { span =>
                    let #binding: #ty = ::core::default::Default::default();
                },
                zero_check,
            }
        }
        Strategy::Named(name) => {
            collect_generics_from_type(ty, ctx.generics, &mut ctx.bounds.filtered);
            let name = LitStr::new(name, span);
            FieldTokens {
                transform: quote_spanned! { span =>
                    let #binding = #crate_root::filter_named(#binding, #name, mapper);
                },
                zero_check,
            }
        }
        Strategy::Walk => {
            collect_generics_from_type(ty, ctx.generics, &mut ctx.bounds.filtered);
            FieldTokens {
                transform: quote_spanned! { span =>
                    let #binding = #crate_root::walk(#binding, mapper);
                },
                zero_check,
            }
        }
    }
}

/// Code for one set of fields: a struct body or an enum variant.
pub(crate) struct FieldsRebuild {
    /// Binds every field to `field_N`. Also rebuilds the value once the
    /// bindings hold filtered values.
    pub(crate) pattern: TokenStream,
    /// One rebinding statement per field, in declaration order.
    pub(crate) transforms: Vec<TokenStream>,
    pub(crate) zero_checks: Vec<TokenStream>,
}

/// Generates the per-field code for `fields`, reached through `path`
/// (`Self` or `Enum::Variant`).
///
/// With `reset_private`, fields without a visibility qualifier are reset.
pub(crate) fn rebuild_fields(
    ctx: &mut DeriveContext<'_>,
    fields: &Fields,
    path: &TokenStream,
    reset_private: bool,
) -> Result<FieldsRebuild> {
    let mut bindings = Vec::new();
    let mut transforms = Vec::new();
    let mut zero_checks = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let options = parse_field_options(&field.attrs)?;
        let accessible = !reset_private || !matches!(field.vis, Visibility::Inherited);
        let strategy = resolve_strategy(&options, accessible, field.ident.as_ref());
        let binding = format_ident!("field_{index}");

        let tokens = generate_field_transform(ctx, &field.ty, &binding, field.span(), &strategy);
        transforms.push(tokens.transform);
        zero_checks.push(tokens.zero_check);
        bindings.push(binding);
    }

    let pattern = match fields {
        Fields::Named(named) => {
            let idents = named.named.iter().filter_map(|field| field.ident.as_ref());
            quote! { #path { #(#idents: #bindings),* } }
        }
        Fields::Unnamed(_) => quote! { #path ( #(#bindings),* ) },
        Fields::Unit => quote! { #path },
    };

    Ok(FieldsRebuild {
        pattern,
        transforms,
        zero_checks,
    })
}

/// Joins per-field zero tests; a value with no checked fields is zero.
pub(crate) fn zero_conjunction(checks: &[TokenStream]) -> TokenStream {
    match checks.split_first() {
        None => quote! { true },
        Some((first, rest)) => quote! { #first #(&& #rest)* },
    }
}
