use crate::{mul_div_floor, MathError};

/// Amount of `total` unlocked at `now` under a linear schedule that opens at
/// `start` and completes after `duration` seconds.
///
/// Returns `0` before `start` and `total` from `start + duration` on. A zero
/// duration unlocks everything at `start`.
pub fn vested_amount(total: u128, start: u64, duration: u64, now: u64) -> Result<u128, MathError> {
    if now < start {
        return Ok(0);
    }

    let elapsed = now - start;
    if elapsed >= duration {
        return Ok(total);
    }

    mul_div_floor(total, elapsed, duration)
}

/// [`vested_amount`] for a schedule given by its `start` and `end` boundaries.
pub fn vested_between(total: u128, start: u64, end: u64, now: u64) -> Result<u128, MathError> {
    let duration = end.checked_sub(start).ok_or(MathError::InvalidWindow)?;
    vested_amount(total, start, duration, now)
}

pub fn claimable(
    total: u128,
    start: u64,
    duration: u64,
    claimed: u128,
    now: u64,
) -> Result<u128, MathError> {
    vested_amount(total, start, duration, now)?
        .checked_sub(claimed)
        .ok_or(MathError::Underflow)
}
