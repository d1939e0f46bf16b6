//! The frozen filter and its text-level replacement.

use std::{collections::HashSet, fmt, sync::Arc};

use regex::{Captures, NoExpand, Regex};

use crate::{
    builder::PersonalDataFilterBuilder,
    traversal::{walk, FilterMapper, PersonalData},
};

/// Replacement applied to each detection pattern match.
pub type MatchReplacer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Removes personal data from values of any [`PersonalData`] type.
///
/// A filter is immutable once built and can be shared across threads.
#[derive(Clone)]
pub struct PersonalDataFilter {
    mask: String,
    pattern: Regex,
    personal_data_names: HashSet<String>,
    replacer: Option<MatchReplacer>,
}

impl PersonalDataFilter {
    pub(crate) fn new(
        mask: String,
        pattern: Regex,
        personal_data_names: HashSet<String>,
        replacer: Option<MatchReplacer>,
    ) -> Self {
        Self {
            mask,
            pattern,
            personal_data_names,
            replacer,
        }
    }

    /// Starts a new configuration.
    pub fn builder() -> PersonalDataFilterBuilder {
        PersonalDataFilterBuilder::new()
    }

    /// Returns a copy of `input` with personal data replaced.
    ///
    /// The input is never modified. Every container in the result is freshly
    /// allocated.
    #[must_use]
    pub fn remove_personal_data<T: PersonalData>(&self, input: &T) -> T {
        walk(input, self)
    }

    /// Replaces every detection pattern match in `text`.
    ///
    /// Spans between matches are kept verbatim. The mask is inserted literally.
    #[must_use]
    pub fn filter_text(&self, text: &str) -> String {
        match &self.replacer {
            Some(replacer) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| replacer(&caps[0]))
                .into_owned(),
            None => self
                .pattern
                .replace_all(text, NoExpand(&self.mask))
                .into_owned(),
        }
    }

    /// The string that replaces personal data.
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// The compiled detection pattern.
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Whether `name` is one of the personal data names, ignoring case.
    pub fn is_personal_data_name(&self, name: &str) -> bool {
        self.personal_data_names.contains(&name.to_lowercase())
    }
}

impl FilterMapper for PersonalDataFilter {
    fn filter_text(&self, text: &str) -> String {
        PersonalDataFilter::filter_text(self, text)
    }

    fn mask(&self) -> &str {
        &self.mask
    }

    fn is_personal_data_name(&self, name: &str) -> bool {
        PersonalDataFilter::is_personal_data_name(self, name)
    }
}

impl fmt::Debug for PersonalDataFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.personal_data_names.iter().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("PersonalDataFilter")
            .field("mask", &self.mask)
            .field("pattern", &self.pattern.as_str())
            .field("personal_data_names", &names)
            .field("replacer", &self.replacer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
