#![no_std]
#![allow(clippy::too_many_arguments)]

mod contract;
mod errors;
mod storage;
mod types;


pub use contract::{PresaleContract, PresaleContractClient};
pub use errors::Error;
pub use sale_math::BonusTier;
pub use types::{Contribution, SaleConfig, SaleWindows};
