use sale_math::BonusTier;
use soroban_sdk::{contracttype, Address, Env, Vec};

/// Ledger timestamps bounding each phase of the sale.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleWindows {
    pub funding_start: u64,
    pub funding_end: u64,
    /// Until this time only allow-listed participants may contribute; 0 disables it.
    pub whitelist_end: u64,
    pub claim_start: u64,
    /// Bonus tokens vest linearly from `claim_start` to this time.
    pub vesting_end: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub owner: Address,
    pub sale_token: Address,
    pub payment_token: Address,
    pub funds_wallet: Address,
    pub windows: SaleWindows,
    pub total_tokens_for_sale: u128,
    pub tiers: Vec<BonusTier>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Contribution {
    pub amount: u128,           // raw payment tokens contributed
    pub effective_amount: u128, // amount plus tier bonus
    pub claimed: bool,          // immediate tokens released
    pub claimed_bonus_tokens: u128,
}

#[contracttype]
pub enum DataKey {
    Config,
    TotalRaised,
    TotalEffective,
    TokensDeposited,
    UnsoldWithdrawn,
    Contribution(Address),
    Whitelisted(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
