use crate::errors::Error;
use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Metadata)
        .ok_or(Error::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
}

pub fn get_endpoint(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Endpoint)
}

pub fn set_endpoint(env: &Env, endpoint: &Address) {
    env.storage().instance().set(&DataKey::Endpoint, endpoint);
}

/// Returns the current outbound nonce and advances the counter.
pub fn next_nonce(env: &Env) -> Result<u64, Error> {
    let nonce: u64 = env.storage().instance().get(&DataKey::Nonce).unwrap_or(0);
    let next = nonce.checked_add(1).ok_or(Error::MathOverflow)?;
    env.storage().instance().set(&DataKey::Nonce, &next);
    Ok(nonce)
}

pub fn read_balance(env: &Env, owner: &Address) -> i128 {
    let key = DataKey::Balance(owner.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

fn write_balance(env: &Env, owner: &Address, amount: i128) {
    let key = DataKey::Balance(owner.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(env: &Env, owner: &Address, amount: i128) -> Result<(), Error> {
    let balance = read_balance(env, owner)
        .checked_add(amount)
        .ok_or(Error::MathOverflow)?;
    write_balance(env, owner, balance);
    Ok(())
}

pub fn spend_balance(env: &Env, owner: &Address, amount: i128) -> Result<(), Error> {
    let balance = read_balance(env, owner);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    write_balance(env, owner, balance - amount);
    Ok(())
}

/// Allowance as seen at the current ledger; expired approvals read as zero.
pub fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), Error> {
    let current = env.ledger().sequence();
    if amount > 0 && expiration_ledger < current {
        return Err(Error::InvalidExpiration);
    }

    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });
    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };
    env.storage().temporary().set(&key, &allowance);

    if amount > 0 {
        let live_for = expiration_ledger - current;
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
    Ok(())
}

pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), Error> {
    let allowance = read_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(Error::InsufficientAllowance);
    }
    if amount > 0 {
        write_allowance(
            env,
            from,
            spender,
            allowance.amount - amount,
            allowance.expiration_ledger,
        )?;
    }
    Ok(())
}
