//! Unions have no field to walk safely, so the derive rejects them.

use pdfilter::PersonalData;

#[derive(Clone, Copy, PersonalData)]
union Bits {
    pub small: u32,
    pub large: u64,
}

fn main() {}
