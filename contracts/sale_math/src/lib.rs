#![no_std]

//! Integer arithmetic shared by the sale contracts.
//!
//! Everything here is pure and deterministic: unsigned integers, floor
//! division, checked overflow. Contracts call into this crate and map
//! [`MathError`] into their own error enums.

#[cfg(test)]
#[macro_use]
extern crate std;

mod bonus;
mod error;
mod muldiv;
mod share;
mod vesting;

pub use bonus::{bonus_of, default_tiers, effective_amount, validate_tiers, BonusTier, ONE_UNIT};
pub use error::MathError;
pub use muldiv::mul_div_floor;
pub use share::pro_rata;
pub use vesting::{claimable, vested_amount, vested_between};
