//! `SystemTime` does not implement `PersonalData`.
//!
//! Wrap it in a `#[pdfilter(nofilter)]` newtype to copy it through.

use pdfilter::PersonalData;
use std::time::SystemTime;

#[derive(Clone, PersonalData)]
struct Visit {
    pub page: String,
    pub at: SystemTime,
}

fn main() {}
