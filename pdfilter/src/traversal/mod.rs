//! Value traversal: the rebuild machinery behind `remove_personal_data`.
//!
//! - [`PersonalData`]: types that can be rebuilt with personal data removed.
//!   Implemented by `#[derive(PersonalData)]` and, in [`std_impls`], for
//!   strings, scalars and std containers.
//! - [`FilterMapper`]: the seam the traversal calls into for text replacement,
//!   the mask and name lookups.
//! - [`walk`] and [`filter_named`]: the per-value and per-named-value steps that
//!   generated code and container impls share.
//!
//! ## Rules
//!
//! | Value | Result |
//! |-------|--------|
//! | zero (`is_zero`) | cloned, nothing inspected |
//! | text | every pattern match replaced |
//! | named text whose name is personal | the mask, as a whole |
//! | sequences and sets | rebuilt element by element |
//! | maps | keys kept, values treated as named by their text key |
//! | `Option`, `Box`, `Rc`, `Arc` | pointee walked into a fresh wrapper |
//! | anything else | cloned |
//!
//! Nothing here mutates its input and nothing here fails.

mod std_impls;

use crate::filter::PersonalDataFilter;

/// Text replacement and name lookups used while rebuilding a value.
#[doc(hidden)]
pub trait FilterMapper {
    /// Replaces every detection pattern match in `text`.
    fn filter_text(&self, text: &str) -> String;

    /// The replacement for text whose name marks it as personal.
    fn mask(&self) -> &str;

    /// Whether `name` is a personal data name, ignoring case.
    fn is_personal_data_name(&self, name: &str) -> bool;
}

/// A type that can be rebuilt with its personal data removed.
///
/// Derive it with `#[derive(PersonalData)]` for your own structs and enums.
/// Implementations for strings, numbers and std containers are provided.
///
/// ## Foreign types
///
/// Orphan rules prevent implementing this for types from other crates. Wrap
/// such a value in a local newtype marked `#[pdfilter(nofilter)]` to copy it
/// verbatim.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `PersonalData`",
    label = "this type cannot be walked for personal data",
    note = "use `#[derive(PersonalData)]` on the type definition",
    note = "or wrap it in a `#[pdfilter(nofilter)]` newtype to copy it unchanged"
)]
pub trait PersonalData: Clone {
    /// Rebuilds the value through `mapper`.
    ///
    /// Callers go through [`walk`], which skips zero values first.
    #[must_use]
    fn filter_with<M: FilterMapper>(&self, mapper: &M) -> Self;

    /// Whether this is the zero value of its type.
    fn is_zero(&self) -> bool;

    /// A text view, for values that are text.
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// The value holding `mask` in place of this text, for values that are text.
    #[must_use]
    fn mask_text(&self, _mask: &str) -> Option<Self> {
        None
    }
}

/// Rebuilds one value: zero values are cloned, everything else is filtered.
#[doc(hidden)]
#[must_use]
pub fn walk<T, M>(value: &T, mapper: &M) -> T
where
    T: PersonalData,
    M: FilterMapper,
{
    if value.is_zero() {
        return value.clone();
    }
    value.filter_with(mapper)
}

/// Rebuilds a value reached through `name` (a field or a map key).
///
/// Text under a personal data name becomes the mask, even when empty. Every
/// other value is walked.
#[doc(hidden)]
#[must_use]
pub fn filter_named<T, M>(value: &T, name: &str, mapper: &M) -> T
where
    T: PersonalData,
    M: FilterMapper,
{
    if mapper.is_personal_data_name(name) {
        if let Some(masked) = value.mask_text(mapper.mask()) {
            return masked;
        }
    }
    walk(value, mapper)
}

/// Method-style access to [`PersonalDataFilter::remove_personal_data`].
pub trait FilterPersonalData: PersonalData {
    /// Returns a copy of `self` with personal data removed by `filter`.
    #[must_use]
    fn without_personal_data(&self, filter: &PersonalDataFilter) -> Self {
        filter.remove_personal_data(self)
    }
}

impl<T> FilterPersonalData for T where T: PersonalData {}
