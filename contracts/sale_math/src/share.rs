use soroban_sdk::{Env, U256};

use crate::MathError;

/// `floor(amount * numerator / denominator)` evaluated in 256 bits.
///
/// Used for token shares where both factors are full-range balances.
pub fn pro_rata(
    env: &Env,
    amount: u128,
    numerator: u128,
    denominator: u128,
) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let product = U256::from_u128(env, amount).mul(&U256::from_u128(env, numerator));
    product
        .div(&U256::from_u128(env, denominator))
        .to_u128()
        .ok_or(MathError::Overflow)
}
