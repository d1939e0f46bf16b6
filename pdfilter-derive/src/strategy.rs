//! Per-field traversal decisions.
//!
//! Field options and visibility decide how the generated code treats each
//! field.

use proc_macro2::Ident;

use crate::attr::FieldOptions;

/// Field transformation strategy.
///
/// ## Strategy Mapping
///
/// | Field | Strategy | Behavior |
/// |-------|----------|----------|
/// | private struct field | `Reset` | Replaced by `Default::default()` |
/// | `#[pdfilter(nofilter)]` | `Verbatim` | Cloned unchanged |
/// | named (or renamed) field | `Named(name)` | Masked on name match, walked otherwise |
/// | tuple field | `Walk` | Walked |
#[derive(Clone, Debug)]
pub(crate) enum Strategy {
    /// Opt-out: the field is copied as-is.
    Verbatim,
    /// The field cannot be read generically; it is reset to its default.
    Reset,
    /// Name-checked field. Holds the normalized name used for matching.
    Named(String),
    /// Unnamed field: always walked.
    Walk,
}

/// Picks the strategy for one field.
///
/// `accessible` is false for struct fields without a `pub` qualifier.
pub(crate) fn resolve_strategy(
    options: &FieldOptions,
    accessible: bool,
    ident: Option<&Ident>,
) -> Strategy {
    if !accessible {
        return Strategy::Reset;
    }
    if options.nofilter {
        return Strategy::Verbatim;
    }
    match (&options.rename, ident) {
        (Some(rename), _) => Strategy::Named(rename.value()),
        (None, Some(ident)) => Strategy::Named(normalize_field_name(ident)),
        (None, None) => Strategy::Walk,
    }
}

/// Turns `user_email` (or `r#type`) into the name compared against the filter's names.
fn normalize_field_name(ident: &Ident) -> String {
    let raw = ident.to_string();
    let name = raw.strip_prefix("r#").unwrap_or(&raw);
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
