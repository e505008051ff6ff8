#![no_std]

mod contract;
mod errors;
mod storage;
mod types;


pub use contract::{LlamaToken, LlamaTokenClient};
pub use errors::Error;
pub use types::{AllowanceValue, TokenMetadata};
