//! Private fields are reset to `Default::default()`, so their type needs `Default`.

use pdfilter::PersonalData;

#[derive(Clone, PersonalData)]
enum Tier {
    Free,
    Paid,
}

#[derive(Clone, PersonalData)]
struct Plan {
    pub name: String,
    tier: Tier,
}

fn main() {}
