#![no_std]

mod errors;


pub use errors::Error;

use sale_math::vested_amount;
use soroban_sdk::{
    contract, contractimpl, contractmeta, contracttype, log, symbol_short, token, Address, Env,
    Vec,
};

contractmeta!(
    key = "Description",
    val = "Airdrop to registered recipients with linear vesting"
);

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AirdropConfig {
    pub owner: Address,
    pub token: Address,
    pub claim_start: u64,
    pub claim_end: u64,
    /// Seconds after `claim_start` until the full allocation is unlocked.
    pub vesting_period: u64,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Allocation {
    pub claimable_tokens: u128,
    pub claimed_tokens: u128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Allocation(Address),
}

#[contract]
pub struct AirdropContract;

fn load_config(env: &Env) -> Result<AirdropConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

fn get_allocation(env: &Env, recipient: &Address) -> Option<Allocation> {
    env.storage()
        .persistent()
        .get(&DataKey::Allocation(recipient.clone()))
}

fn set_allocation(env: &Env, recipient: &Address, allocation: &Allocation) {
    env.storage()
        .persistent()
        .set(&DataKey::Allocation(recipient.clone()), allocation);
}

#[contractimpl]
impl AirdropContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        claim_start: u64,
        claim_end: u64,
        vesting_period: u64,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if claim_start < env.ledger().timestamp() {
            return Err(Error::ClaimStartInThePast);
        }
        if claim_end <= claim_start {
            return Err(Error::ClaimEndBeforeStart);
        }
        if vesting_period == 0 {
            return Err(Error::ZeroDuration);
        }
        match claim_start.checked_add(vesting_period) {
            Some(vesting_end) if vesting_end <= claim_end => {}
            _ => return Err(Error::VestingExceedsClaimWindow),
        }

        let config = AirdropConfig {
            owner,
            token,
            claim_start,
            claim_end,
            vesting_period,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        Ok(())
    }

    /// Register allocations. A recipient can be registered only once.
    pub fn set_recipients(
        env: Env,
        owner: Address,
        recipients: Vec<Address>,
        amounts: Vec<u128>,
    ) -> Result<(), Error> {
        owner.require_auth();
        let config = load_config(&env)?;
        if config.owner != owner {
            return Err(Error::NotOwner);
        }
        if recipients.len() != amounts.len() {
            return Err(Error::InvalidArrayLength);
        }

        for (recipient, amount) in recipients.iter().zip(amounts.iter()) {
            if amount == 0 {
                return Err(Error::ZeroAmount);
            }
            if get_allocation(&env, &recipient).is_some() {
                return Err(Error::RecipientAlreadySet);
            }

            let allocation = Allocation {
                claimable_tokens: amount,
                claimed_tokens: 0,
            };
            set_allocation(&env, &recipient, &allocation);
            env.events()
                .publish((symbol_short!("recipient"), recipient), amount);
        }
        Ok(())
    }

    pub fn claim(env: Env, recipient: Address) -> Result<u128, Error> {
        recipient.require_auth();
        let config = load_config(&env)?;

        let now = env.ledger().timestamp();
        if now < config.claim_start {
            return Err(Error::ClaimNotStarted);
        }
        if now > config.claim_end {
            return Err(Error::ClaimEnded);
        }

        let mut allocation = get_allocation(&env, &recipient).ok_or(Error::NothingToClaim)?;
        let vested = vested_amount(
            allocation.claimable_tokens,
            config.claim_start,
            config.vesting_period,
            now,
        )
        .map_err(|_| Error::MathOverflow)?;
        let amount = vested
            .checked_sub(allocation.claimed_tokens)
            .ok_or(Error::MathOverflow)?;
        if amount == 0 {
            return Err(Error::NothingVestedToClaim);
        }

        allocation.claimed_tokens = vested;
        set_allocation(&env, &recipient, &allocation);

        let payout = i128::try_from(amount).map_err(|_| Error::AmountOverflow)?;
        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &recipient,
            &payout,
        );

        log!(&env, "airdrop claim", recipient, amount);
        env.events()
            .publish((symbol_short!("claimed"), recipient), amount);
        Ok(amount)
    }

    pub fn withdraw(env: Env, owner: Address, token: Address, amount: i128) -> Result<(), Error> {
        owner.require_auth();
        let config = load_config(&env)?;
        if config.owner != owner {
            return Err(Error::NotOwner);
        }

        token::Client::new(&env, &token).transfer(&env.current_contract_address(), &owner, &amount);
        env.events()
            .publish((symbol_short!("withdraw"), token), amount);
        Ok(())
    }

    /// Total allocation of `recipient`, claimed or not.
    pub fn claimable_tokens(env: Env, recipient: Address) -> u128 {
        get_allocation(&env, &recipient)
            .map(|a| a.claimable_tokens)
            .unwrap_or(0)
    }

    pub fn claimed_tokens(env: Env, recipient: Address) -> u128 {
        get_allocation(&env, &recipient)
            .map(|a| a.claimed_tokens)
            .unwrap_or(0)
    }

    pub fn get_config(env: Env) -> Result<AirdropConfig, Error> {
        load_config(&env)
    }
}
