//! Helpers shared by the cross-contract scenarios.

pub mod assertions;
pub mod fixtures;

pub use fixtures::*;

pub mod constants {
    use sale_math::ONE_UNIT;

    pub const DECIMALS: u32 = 18;
    pub const SALE_SUPPLY: u128 = 10_000_000 * ONE_UNIT;
    pub const TEAM_SUPPLY: u128 = 2_000_000 * ONE_UNIT;
    pub const AIRDROP_SUPPLY: u128 = 1_000_000 * ONE_UNIT;
    pub const START_TIME: u64 = 1_700_000_000;
    pub const DAY: u64 = 24 * 60 * 60;
}
