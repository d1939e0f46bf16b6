//! Configuration assembly for [`PersonalDataFilter`].
//!
//! The builder records the first configuration error it sees and ignores every
//! setter after that, so calls can be chained without checking each one. The
//! error surfaces from [`PersonalDataFilterBuilder::build`].

use std::{collections::HashSet, sync::Arc};

use regex::Regex;

use crate::{
    error::{Error, Result},
    filter::{MatchReplacer, PersonalDataFilter},
    patterns::{union_of, DEFAULT_PATTERNS, DEFAULT_PERSONAL_DATA_NAMES},
};

/// Builds a [`PersonalDataFilter`] from chained configuration calls.
///
/// ```
/// use pdfilter::PersonalDataFilterBuilder;
///
/// let filter = PersonalDataFilterBuilder::new()
///     .mask("*****")
///     .add_personal_data_names(["ssn"])
///     .build()
///     .unwrap();
///
/// assert_eq!(filter.filter_text("mail me at some@mail.com"), "mail me at *****");
/// ```
#[derive(Default)]
#[must_use]
pub struct PersonalDataFilterBuilder {
    mask: String,
    pattern: Option<Regex>,
    additional_patterns: Option<Vec<String>>,
    personal_data_names: Option<Vec<String>>,
    additional_personal_data_names: Option<Vec<String>>,
    replacer: Option<MatchReplacer>,
    error: Option<Error>,
}

impl PersonalDataFilterBuilder {
    /// Creates a builder with the default patterns, names and an empty mask.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string that replaces personal data.
    pub fn mask(mut self, mask: impl Into<String>) -> Self {
        if self.error.is_some() {
            return self;
        }

        self.mask = mask.into();
        self
    }

    /// Replaces the default detection pattern entirely.
    ///
    /// Cannot be combined with [`Self::add_patterns`].
    pub fn pattern(mut self, pattern: Regex) -> Self {
        if self.error.is_some() {
            return self;
        }

        if self.additional_patterns.is_some() {
            self.error = Some(Error::ConflictingPatterns);
            return self;
        }

        self.pattern = Some(pattern);
        self
    }

    /// Adds detection fragments to the default email, GUID, IPv4 and IPv6 ones.
    ///
    /// Repeated calls accumulate. Cannot be combined with [`Self::pattern`].
    pub fn add_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.error.is_some() {
            return self;
        }

        if self.pattern.is_some() {
            self.error = Some(Error::ConflictingPatterns);
            return self;
        }

        self.additional_patterns
            .get_or_insert_with(Vec::new)
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Replaces the default personal data names used for struct fields and map keys.
    ///
    /// An empty list leaves the defaults in place. Cannot be combined with [`Self::add_personal_data_names`].
    pub fn personal_data_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.error.is_some() {
            return self;
        }

        if self.additional_personal_data_names.is_some() {
            self.error = Some(Error::ConflictingPersonalDataNames);
            return self;
        }

        self.personal_data_names
            .get_or_insert_with(Vec::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds names to the default personal data names.
    ///
    /// Repeated calls accumulate. Cannot be combined with [`Self::personal_data_names`].
    pub fn add_personal_data_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.error.is_some() {
            return self;
        }

        if self.personal_data_names.is_some() {
            self.error = Some(Error::ConflictingPersonalDataNames);
            return self;
        }

        self.additional_personal_data_names
            .get_or_insert_with(Vec::new)
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Replaces each pattern match with `replacer(match)` instead of the mask.
    ///
    /// Fields masked because of their name still receive the mask.
    pub fn match_replacer<F>(mut self, replacer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        if self.error.is_some() {
            return self;
        }

        self.replacer = Some(Arc::new(replacer));
        self
    }

    /// Replaces each pattern match with the hex SHA-256 digest of the match.
    #[cfg(feature = "hash")]
    pub fn hash_matches(self) -> Self {
        self.match_replacer(sha256_hex)
    }

    /// Validates the configuration and freezes it into a filter.
    pub fn build(self) -> Result<PersonalDataFilter> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let pattern = match self.pattern {
            Some(pattern) => pattern,
            None => {
                let additional = self.additional_patterns.unwrap_or_default();
                let fragments = DEFAULT_PATTERNS
                    .into_iter()
                    .chain(additional.iter().map(String::as_str));
                Regex::new(&union_of(fragments))?
            }
        };

        let personal_data_names: HashSet<String> = match self
            .personal_data_names
            .filter(|names| !names.is_empty())
        {
            Some(names) => names.iter().map(|name| name.to_lowercase()).collect(),
            None => DEFAULT_PERSONAL_DATA_NAMES
                .iter()
                .map(ToString::to_string)
                .chain(
                    self.additional_personal_data_names
                        .unwrap_or_default()
                        .into_iter()
                        .map(|name| name.to_lowercase()),
                )
                .collect(),
        };

        Ok(PersonalDataFilter::new(
            self.mask,
            pattern,
            personal_data_names,
            self.replacer,
        ))
    }
}

#[cfg(feature = "hash")]
fn sha256_hex(matched: &str) -> String {
    use sha2::{Digest, Sha256};

    format!("{:x}", Sha256::digest(matched.as_bytes()))
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::PersonalDataFilterBuilder;
    use crate::Error;

    #[test]
    fn setters_after_an_error_are_ignored() {
        let builder = PersonalDataFilterBuilder::new()
            .add_personal_data_names(["some"])
            .personal_data_names(["prop"])
            .mask("ignored")
            .add_patterns(["ignored"])
            .match_replacer(|_| String::new());

        assert!(builder.mask.is_empty());
        assert!(builder.additional_patterns.is_none());
        assert!(builder.replacer.is_none());
        assert!(matches!(
            builder.error,
            Some(Error::ConflictingPersonalDataNames)
        ));
    }

    #[test]
    fn first_error_is_kept() {
        let result = PersonalDataFilterBuilder::new()
            .pattern(Regex::new("x").unwrap())
            .add_patterns(["y"])
            .personal_data_names(["a"])
            .add_personal_data_names(["b"])
            .build();

        assert!(matches!(result, Err(Error::ConflictingPatterns)));
    }

    #[test]
    fn empty_additive_call_still_conflicts() {
        let result = PersonalDataFilterBuilder::new()
            .add_patterns(Vec::<String>::new())
            .pattern(Regex::new("x").unwrap())
            .build();

        assert!(matches!(result, Err(Error::ConflictingPatterns)));
    }

    #[test]
    fn additive_calls_accumulate() {
        let builder = PersonalDataFilterBuilder::new()
            .add_patterns(["a"])
            .add_patterns(["b", "c"]);

        assert_eq!(
            builder.additional_patterns,
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn mask_last_write_wins() {
        let builder = PersonalDataFilterBuilder::new().mask("a").mask("b");
        assert_eq!(builder.mask, "b");
    }

    #[test]
    fn invalid_fragment_is_reported() {
        let result = PersonalDataFilterBuilder::new().add_patterns(["("]).build();
        assert!(matches!(result, Err(Error::InvalidPattern(_))));
    }

    #[test]
    fn names_are_lowercased() {
        let filter = PersonalDataFilterBuilder::new()
            .personal_data_names(["MyProp"])
            .build()
            .unwrap();

        assert!(filter.is_personal_data_name("myprop"));
        assert!(filter.is_personal_data_name("MYPROP"));
        assert!(!filter.is_personal_data_name("email"));
    }

    #[test]
    fn additional_names_extend_defaults() {
        let filter = PersonalDataFilterBuilder::new()
            .add_personal_data_names(["MyProp"])
            .build()
            .unwrap();

        assert!(filter.is_personal_data_name("myprop"));
        assert!(filter.is_personal_data_name("email"));
        assert!(filter.is_personal_data_name("ipaddress"));
    }

    #[test]
    fn empty_name_list_keeps_defaults() {
        let filter = PersonalDataFilterBuilder::new()
            .personal_data_names(Vec::<String>::new())
            .build()
            .unwrap();

        assert!(filter.is_personal_data_name("email"));
        assert!(filter.is_personal_data_name("pwd"));
    }

    #[cfg(feature = "hash")]
    #[test]
    fn sha256_hex_matches_known_digest() {
        assert_eq!(
            super::sha256_hex("email@mail.com"),
            "3d13579f08e876d2d2d94da15ea657fb39795dd2a59e3378c9e58c4f4b0d053b"
        );
    }
}
