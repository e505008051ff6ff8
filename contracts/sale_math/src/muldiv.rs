use crate::MathError;

/// `floor(value * numerator / denominator)` without a 256-bit intermediate.
///
/// Splits `value = q * denominator + r`, so the result is
/// `q * numerator + floor(r * numerator / denominator)`. Since
/// `r < denominator <= u64::MAX`, `r * numerator` always fits in `u128`;
/// only a result that itself exceeds `u128` reports [`MathError::Overflow`].
pub fn mul_div_floor(value: u128, numerator: u64, denominator: u64) -> Result<u128, MathError> {
    if denominator == 0 {
        return Err(MathError::DivisionByZero);
    }

    let numerator = numerator as u128;
    let denominator = denominator as u128;

    let whole = (value / denominator)
        .checked_mul(numerator)
        .ok_or(MathError::Overflow)?;
    let part = (value % denominator) * numerator / denominator;

    whole.checked_add(part).ok_or(MathError::Overflow)
}
