//! Personal data filtering for arbitrary in-memory values.
//!
//! This crate scrubs personally identifiable information from values before
//! they are logged, serialized or sent elsewhere. A [`PersonalDataFilter`] is
//! configured once through [`PersonalDataFilterBuilder`] and then applied to
//! any [`PersonalData`] value, producing a rebuilt copy.
//!
//! Two signals decide what is personal:
//! - **Names**: a text field or map value whose name is in the personal data
//!   names (`email`, `password`, `ip`, ...) is replaced by the mask as a whole.
//! - **Patterns**: every substring matching the detection pattern (emails,
//!   GUIDs, IPv4 and IPv6 addresses by default) is replaced by the mask or by
//!   the configured match replacer.
//!
//! Key rules:
//! - Use `#[derive(PersonalData)]` on structs and enums you want to filter.
//! - Use `#[pdfilter(nofilter)]` on fields that must be copied unchanged.
//! - Zero values (empty strings and collections, `None`, `0`) are copied as-is.
//! - Struct fields that are not `pub` come back as `Default::default()`.
//!
//! What this crate does not do:
//! - perform I/O or logging (see the `slog` feature for an adapter)
//! - classify personal data beyond name and pattern matching
//!
//! ```
//! use pdfilter::PersonalDataFilter;
//! use std::collections::HashMap;
//!
//! let filter = PersonalDataFilter::builder().mask("*****").build()?;
//!
//! let mut fields = HashMap::new();
//! fields.insert("email".to_string(), "not an address".to_string());
//! fields.insert("note".to_string(), "contact some@mail.com".to_string());
//!
//! let filtered = filter.remove_personal_data(&fields);
//! assert_eq!(filtered["email"], "*****");
//! assert_eq!(filtered["note"], "contact *****");
//! # Ok::<(), pdfilter::Error>(())
//! ```

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
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use pdfilter_derive::PersonalData;

#[allow(unused_extern_crates)]
extern crate self as pdfilter;

mod builder;
mod error;
mod filter;
#[cfg(feature = "json")]
mod json;
pub mod patterns;
#[cfg(feature = "slog")]
pub mod slog;
mod traversal;

pub use builder::PersonalDataFilterBuilder;
pub use error::{Error, Result};
pub use filter::{MatchReplacer, PersonalDataFilter};
pub use traversal::{FilterPersonalData, PersonalData};
#[doc(hidden)]
pub use traversal::{filter_named, walk, FilterMapper};
