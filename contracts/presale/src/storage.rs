use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Option<SaleConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_total_raised(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalRaised)
        .unwrap_or(0)
}

pub fn set_total_raised(env: &Env, amount: u128) {
    env.storage().instance().set(&DataKey::TotalRaised, &amount);
}

pub fn get_total_effective(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalEffective)
        .unwrap_or(0)
}

pub fn set_total_effective(env: &Env, amount: u128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalEffective, &amount);
}

pub fn is_tokens_deposited(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::TokensDeposited)
        .unwrap_or(false)
}

pub fn set_tokens_deposited(env: &Env, deposited: bool) {
    env.storage()
        .instance()
        .set(&DataKey::TokensDeposited, &deposited);
}

pub fn is_unsold_withdrawn(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::UnsoldWithdrawn)
        .unwrap_or(false)
}

pub fn set_unsold_withdrawn(env: &Env) {
    env.storage()
        .instance()
        .set(&DataKey::UnsoldWithdrawn, &true);
}

pub fn get_contribution(env: &Env, participant: &Address) -> Option<Contribution> {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(participant.clone()))
}

pub fn set_contribution(env: &Env, participant: &Address, contribution: &Contribution) {
    env.storage()
        .persistent()
        .set(&DataKey::Contribution(participant.clone()), contribution);
}

pub fn is_whitelisted(env: &Env, participant: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelisted(participant.clone()))
        .unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, participant: &Address, allowed: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::Whitelisted(participant.clone()), &allowed);
}
