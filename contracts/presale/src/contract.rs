use crate::errors::Error;
use crate::storage::*;
use crate::types::*;
use sale_math::{effective_amount, pro_rata, validate_tiers, vested_between, BonusTier};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, symbol_short, token, Address, Env, Vec,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Presale with tiered contribution bonus and vested bonus tokens"
);

#[contract]
pub struct PresaleContract;

fn to_i128(amount: u128) -> Result<i128, Error> {
    i128::try_from(amount).map_err(|_| Error::AmountOverflow)
}

fn load_config(env: &Env) -> Result<SaleConfig, Error> {
    get_config(env).ok_or(Error::NotInitialized)
}

fn ensure_owner(env: &Env, caller: &Address) -> Result<SaleConfig, Error> {
    let config = load_config(env)?;
    if config.owner != *caller {
        return Err(Error::NotOwner);
    }
    Ok(config)
}

fn validate_windows(windows: &SaleWindows) -> Result<(), Error> {
    let ordered = windows.funding_start < windows.funding_end
        && windows.funding_end < windows.claim_start
        && windows.claim_start < windows.vesting_end;
    let whitelist_ok = windows.whitelist_end == 0
        || (windows.whitelist_end >= windows.funding_start
            && windows.whitelist_end <= windows.funding_end);

    if !ordered || !whitelist_ok {
        return Err(Error::InvalidTimeWindow);
    }
    Ok(())
}

/// Tokens a participant is owed in total: `(immediate, bonus)`.
///
/// Both are the participant's pro-rata share of the sale supply, weighted by
/// the raw and the effective amount against the sale-wide effective total.
fn entitlement(
    env: &Env,
    config: &SaleConfig,
    contribution: &Contribution,
) -> Result<(u128, u128), Error> {
    let total_effective = get_total_effective(env);
    let supply = config.total_tokens_for_sale;

    let immediate = pro_rata(env, contribution.amount, supply, total_effective)?;
    let full = pro_rata(env, contribution.effective_amount, supply, total_effective)?;

    Ok((immediate, full - immediate))
}

/// What a claim at `now` would release: `(immediate, bonus)`.
fn releasable(
    env: &Env,
    config: &SaleConfig,
    contribution: &Contribution,
    now: u64,
) -> Result<(u128, u128), Error> {
    let (immediate, bonus_total) = entitlement(env, config, contribution)?;

    let vested = vested_between(
        bonus_total,
        config.windows.claim_start,
        config.windows.vesting_end,
        now,
    )?;
    let bonus = vested
        .checked_sub(contribution.claimed_bonus_tokens)
        .ok_or(Error::MathOverflow)?;
    let immediate = if contribution.claimed { 0 } else { immediate };

    Ok((immediate, bonus))
}

#[contractimpl]
impl PresaleContract {
    /// Configure the sale. Sale tokens are pulled in separately through
    /// `deposit_tokens`.
    pub fn initialize(
        env: Env,
        owner: Address,
        sale_token: Address,
        payment_token: Address,
        funds_wallet: Address,
        windows: SaleWindows,
        total_tokens_for_sale: u128,
        tiers: Vec<BonusTier>,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        validate_windows(&windows)?;
        if total_tokens_for_sale == 0 {
            return Err(Error::InvalidAmount);
        }
        to_i128(total_tokens_for_sale)?;
        validate_tiers(tiers.iter())?;

        let config = SaleConfig {
            owner,
            sale_token: sale_token.clone(),
            payment_token,
            funds_wallet,
            windows: windows.clone(),
            total_tokens_for_sale,
            tiers,
        };
        set_config(&env, &config);
        set_total_raised(&env, 0);
        set_total_effective(&env, 0);
        set_tokens_deposited(&env, false);

        env.events().publish(
            (symbol_short!("init"),),
            (sale_token, total_tokens_for_sale, windows.funding_start),
        );
        Ok(())
    }

    /// Move the full sale supply from the owner into the contract. One-shot.
    pub fn deposit_tokens(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        let config = ensure_owner(&env, &owner)?;

        if is_tokens_deposited(&env) || is_unsold_withdrawn(&env) {
            return Err(Error::AlreadyDeposited);
        }

        let amount = to_i128(config.total_tokens_for_sale)?;
        token::Client::new(&env, &config.sale_token).transfer(
            &owner,
            &env.current_contract_address(),
            &amount,
        );
        set_tokens_deposited(&env, true);

        log!(&env, "sale tokens deposited", amount);
        env.events()
            .publish((symbol_short!("tok_dep"),), config.total_tokens_for_sale);
        Ok(())
    }

    pub fn set_whitelist(
        env: Env,
        owner: Address,
        participants: Vec<Address>,
        allowed: bool,
    ) -> Result<(), Error> {
        owner.require_auth();
        ensure_owner(&env, &owner)?;

        for participant in participants.iter() {
            set_whitelisted(&env, &participant, allowed);
            env.events()
                .publish((symbol_short!("whitelist"), participant), allowed);
        }
        Ok(())
    }

    /// Contribute `amount` payment tokens. Returns the effective amount
    /// credited: the tier bonus is placed by the sale-wide raw total raised
    /// before this contribution.
    pub fn contribute(env: Env, participant: Address, amount: u128) -> Result<u128, Error> {
        participant.require_auth();
        let config = load_config(&env)?;

        if amount == 0 {
            return Err(Error::ZeroContribution);
        }

        let now = get_ledger_timestamp(&env);
        let windows = &config.windows;
        if now < windows.funding_start || now > windows.funding_end {
            return Err(Error::NotInFundingPeriod);
        }
        if now < windows.whitelist_end && !is_whitelisted(&env, &participant) {
            return Err(Error::NotWhitelisted);
        }
        if !is_tokens_deposited(&env) {
            return Err(Error::TokensNotDeposited);
        }

        let total_raised = get_total_raised(&env);
        let effective = effective_amount(amount, total_raised, config.tiers.iter())?;

        let mut contribution = get_contribution(&env, &participant).unwrap_or_default();
        contribution.amount = contribution
            .amount
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        contribution.effective_amount = contribution
            .effective_amount
            .checked_add(effective)
            .ok_or(Error::MathOverflow)?;

        let total_raised = total_raised
            .checked_add(amount)
            .ok_or(Error::MathOverflow)?;
        let total_effective = get_total_effective(&env)
            .checked_add(effective)
            .ok_or(Error::MathOverflow)?;

        token::Client::new(&env, &config.payment_token).transfer(
            &participant,
            &config.funds_wallet,
            &to_i128(amount)?,
        );

        set_contribution(&env, &participant, &contribution);
        set_total_raised(&env, total_raised);
        set_total_effective(&env, total_effective);

        log!(&env, "contribution", participant, amount, effective);
        env.events()
            .publish((symbol_short!("deposit"), participant), (amount, effective));
        Ok(effective)
    }

    /// Release what the participant is owed so far. The first claim pays all
    /// immediate tokens; every claim pays bonus tokens vested since the last.
    /// Returns `(immediate, bonus)` released by this call.
    pub fn claim(env: Env, participant: Address) -> Result<(u128, u128), Error> {
        participant.require_auth();
        let config = load_config(&env)?;

        let now = get_ledger_timestamp(&env);
        if now < config.windows.claim_start || now <= config.windows.funding_end {
            return Err(Error::ClaimPeriodNotStarted);
        }

        let mut contribution = match get_contribution(&env, &participant) {
            Some(c) if c.amount > 0 => c,
            _ => return Err(Error::NoContributionsToClaim),
        };

        let (immediate, bonus) = releasable(&env, &config, &contribution, now)?;
        if immediate == 0 && bonus == 0 {
            return Err(Error::NothingVestedToClaim);
        }

        contribution.claimed = true;
        contribution.claimed_bonus_tokens += bonus;
        set_contribution(&env, &participant, &contribution);

        let payout = immediate.checked_add(bonus).ok_or(Error::MathOverflow)?;
        token::Client::new(&env, &config.sale_token).transfer(
            &env.current_contract_address(),
            &participant,
            &to_i128(payout)?,
        );

        log!(&env, "claim", participant, immediate, bonus);
        env.events()
            .publish((symbol_short!("claimed"), participant), (immediate, bonus));
        Ok((immediate, bonus))
    }

    /// Return the deposited supply to the owner when funding closed without
    /// any contribution.
    pub fn withdraw_unsold(env: Env, owner: Address) -> Result<u128, Error> {
        owner.require_auth();
        let config = ensure_owner(&env, &owner)?;

        if get_ledger_timestamp(&env) <= config.windows.funding_end {
            return Err(Error::FundingNotEnded);
        }
        if !is_tokens_deposited(&env) {
            return Err(Error::TokensNotDeposited);
        }
        if get_total_effective(&env) > 0 || is_unsold_withdrawn(&env) {
            return Err(Error::NothingToWithdraw);
        }

        let amount = config.total_tokens_for_sale;
        set_unsold_withdrawn(&env);
        token::Client::new(&env, &config.sale_token).transfer(
            &env.current_contract_address(),
            &owner,
            &to_i128(amount)?,
        );

        env.events().publish((symbol_short!("unsold"),), amount);
        Ok(amount)
    }

    // View functions
    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        load_config(&env)
    }

    pub fn get_contribution(env: Env, participant: Address) -> Option<Contribution> {
        get_contribution(&env, &participant)
    }

    pub fn total_raised(env: Env) -> u128 {
        get_total_raised(&env)
    }

    pub fn total_effective(env: Env) -> u128 {
        get_total_effective(&env)
    }

    pub fn tokens_deposited(env: Env) -> bool {
        is_tokens_deposited(&env)
    }

    pub fn unsold_withdrawn(env: Env) -> bool {
        is_unsold_withdrawn(&env)
    }

    pub fn is_whitelisted(env: Env, participant: Address) -> bool {
        is_whitelisted(&env, &participant)
    }

    /// Effective amount a contribution of `amount` would be credited right now.
    pub fn preview_effective(env: Env, amount: u128) -> Result<u128, Error> {
        let config = load_config(&env)?;
        Ok(effective_amount(
            amount,
            get_total_raised(&env),
            config.tiers.iter(),
        )?)
    }

    /// Total a claim would pay right now, or 0 if it would fail.
    pub fn get_claimable(env: Env, participant: Address) -> u128 {
        let Some(config) = get_config(&env) else {
            return 0;
        };
        let now = get_ledger_timestamp(&env);
        if now < config.windows.claim_start || now <= config.windows.funding_end {
            return 0;
        }

        match get_contribution(&env, &participant) {
            Some(contribution) if contribution.amount > 0 => {
                match releasable(&env, &config, &contribution, now) {
                    Ok((immediate, bonus)) => immediate.saturating_add(bonus),
                    Err(_) => 0,
                }
            }
            _ => 0,
        }
    }
}
