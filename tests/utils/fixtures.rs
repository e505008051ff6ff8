use crate::utils::constants::*;
use llama_token::{LlamaToken, LlamaTokenClient};
use sale_math::{default_tiers, BonusTier, ONE_UNIT};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, vec, Address, Env, String, Vec,
};

/// Deployer and the accounts holding the initial LLAMA allocations.
pub struct Actors {
    pub admin: Address,
    pub treasury: Address,
    pub team: Address,
    pub funds_wallet: Address,
}

impl Actors {
    pub fn generate(env: &Env) -> Self {
        Self {
            admin: Address::generate(env),
            treasury: Address::generate(env),
            team: Address::generate(env),
            funds_wallet: Address::generate(env),
        }
    }
}

/// Fresh environment with all auths mocked and the clock at `START_TIME`.
pub fn new_env() -> Env {
    let env = Env::default();
    env.mock_all_auths();
    set_time(&env, START_TIME);
    env
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|l| l.timestamp = timestamp);
}

pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

pub fn units(n: u128) -> u128 {
    n * ONE_UNIT
}

pub fn as_i128(amount: u128) -> i128 {
    i128::try_from(amount).unwrap_or(i128::MAX)
}

/// LLAMA with the sale and airdrop supply minted to the treasury and the team
/// share minted to the team.
pub fn deploy_llama<'a>(env: &Env, actors: &Actors) -> LlamaTokenClient<'a> {
    let contract_id = env.register_contract(None, LlamaToken);
    let client = LlamaTokenClient::new(env, &contract_id);
    client.initialize(
        &actors.admin,
        &DECIMALS,
        &String::from_str(env, "LamboLlama"),
        &String::from_str(env, "LLAMA"),
        &vec![
            env,
            (
                actors.treasury.clone(),
                as_i128(SALE_SUPPLY + 2 * AIRDROP_SUPPLY),
            ),
            (actors.team.clone(), as_i128(TEAM_SUPPLY)),
        ],
    );
    client
}

/// Stellar asset standing in for the payment currency.
pub fn deploy_payment_asset<'a>(
    env: &Env,
    admin: &Address,
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let address = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    (
        token::Client::new(env, &address),
        token::StellarAssetClient::new(env, &address),
    )
}

pub fn default_tier_vec(env: &Env) -> Vec<BonusTier> {
    let mut tiers = Vec::new(env);
    for tier in default_tiers() {
        tiers.push_back(tier);
    }
    tiers
}

/// Investor holding `balance` of the payment asset.
pub fn funded_investor(env: &Env, payment_admin: &token::StellarAssetClient, balance: u128) -> Address {
    let investor = Address::generate(env);
    payment_admin.mint(&investor, &as_i128(balance));
    investor
}
