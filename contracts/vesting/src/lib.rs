#![no_std]

use sale_math::{claimable, MathError};
use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, log, symbol_short, token,
    Address, Env,
};

contractmeta!(
    key = "Description",
    val = "Linear token vesting per beneficiary"
);

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingConfig {
    pub owner: Address,
    pub token: Address,
    /// Once set, schedules are frozen and the owner can no longer withdraw.
    pub fixed: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingSchedule {
    pub total_amount: u128,
    pub start: u64,
    pub duration: u64,
    pub claimed_amount: u128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Schedule(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    ContractFixed = 4,
    ZeroAmount = 5,
    ZeroDuration = 6,
    NoSchedule = 7,
    VestingNotStarted = 8,
    NothingToClaim = 9,
    MathOverflow = 10,
    AmountOverflow = 11,
    ScheduleAlreadyClaimed = 12,
}

impl From<MathError> for Error {
    fn from(_: MathError) -> Self {
        Error::MathOverflow
    }
}

#[contract]
pub struct VestingContract;

fn load_config(env: &Env) -> Result<VestingConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

/// Owner-only operations are closed once the contract is fixed.
fn ensure_configurable(env: &Env, caller: &Address) -> Result<VestingConfig, Error> {
    let config = load_config(env)?;
    if config.owner != *caller {
        return Err(Error::NotOwner);
    }
    if config.fixed {
        return Err(Error::ContractFixed);
    }
    Ok(config)
}

fn get_schedule(env: &Env, beneficiary: &Address) -> Option<VestingSchedule> {
    env.storage()
        .persistent()
        .get(&DataKey::Schedule(beneficiary.clone()))
}

fn set_schedule(env: &Env, beneficiary: &Address, schedule: &VestingSchedule) {
    env.storage()
        .persistent()
        .set(&DataKey::Schedule(beneficiary.clone()), schedule);
}

#[contractimpl]
impl VestingContract {
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        let config = VestingConfig {
            owner,
            token,
            fixed: false,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        Ok(())
    }

    /// Create the schedule of `beneficiary`, or replace one nothing has been
    /// claimed from yet.
    pub fn set_vesting_schedule(
        env: Env,
        owner: Address,
        beneficiary: Address,
        total_amount: u128,
        start: u64,
        duration: u64,
    ) -> Result<(), Error> {
        owner.require_auth();
        ensure_configurable(&env, &owner)?;

        if total_amount == 0 {
            return Err(Error::ZeroAmount);
        }
        if duration == 0 {
            return Err(Error::ZeroDuration);
        }
        i128::try_from(total_amount).map_err(|_| Error::AmountOverflow)?;
        if get_schedule(&env, &beneficiary).is_some_and(|s| s.claimed_amount > 0) {
            return Err(Error::ScheduleAlreadyClaimed);
        }

        let schedule = VestingSchedule {
            total_amount,
            start,
            duration,
            claimed_amount: 0,
        };
        set_schedule(&env, &beneficiary, &schedule);

        env.events().publish(
            (symbol_short!("schedule"), beneficiary),
            (total_amount, start, duration),
        );
        Ok(())
    }

    pub fn fix(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        let mut config = load_config(&env)?;
        if config.owner != owner {
            return Err(Error::NotOwner);
        }

        if !config.fixed {
            config.fixed = true;
            env.storage().instance().set(&DataKey::Config, &config);
            env.events().publish((symbol_short!("fixed"),), ());
        }
        Ok(())
    }

    /// Send the whole token balance back to the owner. Only before `fix`.
    pub fn withdraw(env: Env, owner: Address) -> Result<i128, Error> {
        owner.require_auth();
        let config = ensure_configurable(&env, &owner)?;

        let token_client = token::Client::new(&env, &config.token);
        let balance = token_client.balance(&env.current_contract_address());
        if balance > 0 {
            token_client.transfer(&env.current_contract_address(), &owner, &balance);
        }

        env.events().publish((symbol_short!("withdraw"),), balance);
        Ok(balance)
    }

    pub fn claim_tokens(env: Env, beneficiary: Address) -> Result<u128, Error> {
        beneficiary.require_auth();
        let config = load_config(&env)?;
        let mut schedule = get_schedule(&env, &beneficiary).ok_or(Error::NoSchedule)?;

        let now = env.ledger().timestamp();
        if now < schedule.start {
            return Err(Error::VestingNotStarted);
        }

        let amount = claimable(
            schedule.total_amount,
            schedule.start,
            schedule.duration,
            schedule.claimed_amount,
            now,
        )?;
        if amount == 0 {
            return Err(Error::NothingToClaim);
        }

        schedule.claimed_amount += amount;
        set_schedule(&env, &beneficiary, &schedule);

        let payout = i128::try_from(amount).map_err(|_| Error::AmountOverflow)?;
        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &beneficiary,
            &payout,
        );

        log!(&env, "vesting claim", beneficiary, amount, schedule.claimed_amount);
        env.events()
            .publish((symbol_short!("claimed"), beneficiary), amount);
        Ok(amount)
    }

    pub fn get_vesting_schedule(env: Env, beneficiary: Address) -> Option<VestingSchedule> {
        get_schedule(&env, &beneficiary)
    }

    /// Unlocked and not yet claimed; 0 before start or without a schedule.
    pub fn get_claimable_amount(env: Env, beneficiary: Address) -> u128 {
        get_schedule(&env, &beneficiary)
            .and_then(|s| {
                claimable(
                    s.total_amount,
                    s.start,
                    s.duration,
                    s.claimed_amount,
                    env.ledger().timestamp(),
                )
                .ok()
            })
            .unwrap_or(0)
    }

    pub fn is_fixed(env: Env) -> bool {
        load_config(&env).map(|c| c.fixed).unwrap_or(false)
    }

    pub fn get_config(env: Env) -> Result<VestingConfig, Error> {
        load_config(&env)
    }
}
