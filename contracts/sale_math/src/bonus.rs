use soroban_sdk::contracttype;

use crate::{mul_div_floor, MathError};

/// One base unit of an 18-decimal asset.
pub const ONE_UNIT: u128 = 1_000_000_000_000_000_000;

const PERCENT: u64 = 100;

/// A cumulative ceiling and the bonus paid on value credited below it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BonusTier {
    pub ceiling: u128,
    pub bonus_percent: u32,
}

/// 40% up to 15 units, 30% up to 45 units, 15% up to 90 units.
pub fn default_tiers() -> [BonusTier; 3] {
    [
        BonusTier {
            ceiling: 15 * ONE_UNIT,
            bonus_percent: 40,
        },
        BonusTier {
            ceiling: 45 * ONE_UNIT,
            bonus_percent: 30,
        },
        BonusTier {
            ceiling: 90 * ONE_UNIT,
            bonus_percent: 15,
        },
    ]
}

pub fn validate_tiers<I>(tiers: I) -> Result<(), MathError>
where
    I: IntoIterator<Item = BonusTier>,
{
    let mut previous: Option<u128> = None;
    for tier in tiers {
        if let Some(ceiling) = previous {
            if tier.ceiling <= ceiling {
                return Err(MathError::NonIncreasingCeiling);
            }
        } else if tier.ceiling == 0 {
            return Err(MathError::NonIncreasingCeiling);
        }
        previous = Some(tier.ceiling);
    }

    match previous {
        Some(_) => Ok(()),
        None => Err(MathError::EmptyTiers),
    }
}

/// Credits `contribution` on top of `prior_cumulative`, paying each tier's
/// bonus on the slice of the contribution that falls below its ceiling.
///
/// Tiers already filled by `prior_cumulative` are skipped. Whatever is left
/// after the last ceiling is credited one-for-one. Each tier's bonus is
/// floored independently.
pub fn effective_amount<I>(
    contribution: u128,
    prior_cumulative: u128,
    tiers: I,
) -> Result<u128, MathError>
where
    I: IntoIterator<Item = BonusTier>,
{
    let mut remaining = contribution;
    let mut cumulative = prior_cumulative;
    let mut effective: u128 = 0;

    for tier in tiers {
        if remaining == 0 {
            break;
        }
        if cumulative >= tier.ceiling {
            continue;
        }

        let in_tier = remaining.min(tier.ceiling - cumulative);
        let bonus = mul_div_floor(in_tier, tier.bonus_percent as u64, PERCENT)?;

        effective = effective
            .checked_add(in_tier)
            .and_then(|v| v.checked_add(bonus))
            .ok_or(MathError::Overflow)?;
        // bounded by the tier ceiling
        cumulative += in_tier;
        remaining -= in_tier;
    }

    effective.checked_add(remaining).ok_or(MathError::Overflow)
}

/// The bonus part of [`effective_amount`].
pub fn bonus_of<I>(contribution: u128, prior_cumulative: u128, tiers: I) -> Result<u128, MathError>
where
    I: IntoIterator<Item = BonusTier>,
{
    let effective = effective_amount(contribution, prior_cumulative, tiers)?;
    Ok(effective - contribution)
}
