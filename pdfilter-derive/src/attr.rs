//! `#[pdfilter(...)]` attribute parsing.
//!
//! Containers accept `nofilter`. Fields accept `nofilter` and `rename = "..."`.
//! Both go through [`visit_options`], which owns the error messages for
//! unknown options and unsupported attribute forms.

use quote::ToTokens;
use syn::{meta::ParseNestedMeta, spanned::Spanned, Attribute, LitStr, Meta, Result};

/// Where a `#[pdfilter]` attribute is written.
#[derive(Clone, Copy)]
enum Position {
    Container,
    Field,
}

impl Position {
    const fn noun(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Field => "field",
        }
    }

    const fn expected(self) -> &'static str {
        match self {
            Self::Container => "`nofilter`",
            Self::Field => "`nofilter` or `rename`",
        }
    }
}

/// Options from the `#[pdfilter(...)]` attributes on a struct or enum.
#[derive(Clone, Debug, Default)]
pub(crate) struct ContainerOptions {
    /// The whole value is cloned instead of walked.
    pub(crate) nofilter: bool,
}

/// Options from the `#[pdfilter(...)]` attributes on one field.
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) nofilter: bool,
    pub(crate) rename: Option<LitStr>,
}

pub(crate) fn parse_container_options(attrs: &[Attribute]) -> Result<ContainerOptions> {
    let mut options = ContainerOptions::default();
    visit_options(attrs, Position::Container, |meta| {
        if !meta.path.is_ident("nofilter") {
            return Ok(false);
        }
        options.nofilter = true;
        Ok(true)
    })?;
    Ok(options)
}

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();
    visit_options(attrs, Position::Field, |meta| {
        if meta.path.is_ident("nofilter") {
            if options.nofilter {
                return Err(meta.error("duplicate `nofilter` option"));
            }
            options.nofilter = true;
        } else if meta.path.is_ident("rename") {
            if options.rename.is_some() {
                return Err(meta.error("duplicate `rename` option"));
            }
            options.rename = Some(meta.value()?.parse()?);
        } else {
            return Ok(false);
        }
        Ok(true)
    })?;
    Ok(options)
}

/// Feeds every option of every `#[pdfilter(...)]` attribute to `visit`.
///
/// `visit` returns `Ok(false)` for options it does not know.
fn visit_options<F>(attrs: &[Attribute], position: Position, mut visit: F) -> Result<()>
where
    F: FnMut(&ParseNestedMeta<'_>) -> Result<bool>,
{
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("pdfilter")) {
        match (&attr.meta, position) {
            // A bare container attribute carries no options.
            (Meta::Path(_), Position::Container) => {}
            (Meta::Path(_), Position::Field) => {
                return Err(syn::Error::new(
                    attr.span(),
                    "expected field options (e.g., #[pdfilter(nofilter)])",
                ));
            }
            (Meta::List(list), _) => list.parse_nested_meta(|meta| {
                if visit(&meta)? {
                    return Ok(());
                }
                let name = meta.path.to_token_stream().to_string().replace(' ', "");
                Err(meta.error(format!(
                    "unknown {} option `{name}`; expected {}",
                    position.noun(),
                    position.expected()
                )))
            })?,
            (Meta::NameValue(nv), _) => {
                return Err(syn::Error::new_spanned(
                    nv,
                    "name-value syntax is not supported for #[pdfilter]",
                ));
            }
        }
    }
    Ok(())
}
