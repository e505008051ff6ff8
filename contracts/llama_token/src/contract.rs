use crate::errors::Error;
use crate::storage;
use crate::types::TokenMetadata;
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, symbol_short, Address, Bytes, Env, String, Vec,
};

contractmeta!(
    key = "Description",
    val = "LLAMA fungible token with cross-chain transfer hooks"
);

const MAX_DECIMALS: u32 = 18;

fn check_nonnegative_amount(amount: i128) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::NegativeAmount);
    }
    Ok(())
}

fn ensure_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    admin.require_auth();
    if storage::get_admin(env)? != *admin {
        return Err(Error::NotAdmin);
    }
    Ok(())
}

fn mint_to(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    storage::receive_balance(env, to, amount)?;
    let supply = storage::get_total_supply(env)
        .checked_add(amount)
        .ok_or(Error::MathOverflow)?;
    storage::set_total_supply(env, supply);
    Ok(())
}

fn burn_from_balance(env: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    storage::spend_balance(env, from, amount)?;
    let supply = storage::get_total_supply(env)
        .checked_sub(amount)
        .ok_or(Error::MathOverflow)?;
    storage::set_total_supply(env, supply);
    Ok(())
}

#[contract]
pub struct LlamaToken;

#[contractimpl]
impl LlamaToken {
    /// Set metadata and mint the initial allocations, e.g. team and treasury
    /// shares.
    pub fn initialize(
        env: Env,
        admin: Address,
        decimal: u32,
        name: String,
        symbol: String,
        allocations: Vec<(Address, i128)>,
    ) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        if decimal > MAX_DECIMALS {
            return Err(Error::InvalidDecimals);
        }

        storage::set_admin(&env, &admin);
        storage::set_metadata(
            &env,
            &TokenMetadata {
                decimal,
                name,
                symbol,
            },
        );

        for (holder, amount) in allocations.iter() {
            check_nonnegative_amount(amount)?;
            mint_to(&env, &holder, amount)?;
            env.events()
                .publish((symbol_short!("mint"), admin.clone(), holder), amount);
        }

        log!(&env, "token initialized", storage::get_total_supply(&env));
        Ok(())
    }

    pub fn mint(env: Env, admin: Address, to: Address, amount: i128) -> Result<(), Error> {
        check_nonnegative_amount(amount)?;
        ensure_admin(&env, &admin)?;
        storage::extend_instance(&env);

        mint_to(&env, &to, amount)?;
        env.events()
            .publish((symbol_short!("mint"), admin, to), amount);
        Ok(())
    }

    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        ensure_admin(&env, &admin)?;
        storage::extend_instance(&env);

        storage::set_admin(&env, &new_admin);
        env.events()
            .publish((symbol_short!("set_admin"), admin), new_admin);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::extend_instance(&env);
        storage::read_allowance(&env, &from, &spender).amount
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), Error> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance(&env);

        storage::write_allowance(&env, &from, &spender, amount, expiration_ledger)?;
        env.events().publish(
            (symbol_short!("approve"), from, spender),
            (amount, expiration_ledger),
        );
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::extend_instance(&env);
        storage::read_balance(&env, &id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance(&env);

        storage::spend_balance(&env, &from, amount)?;
        storage::receive_balance(&env, &to, amount)?;
        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
        Ok(())
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance(&env);

        storage::spend_allowance(&env, &from, &spender, amount)?;
        storage::spend_balance(&env, &from, amount)?;
        storage::receive_balance(&env, &to, amount)?;
        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
        Ok(())
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance(&env);

        burn_from_balance(&env, &from, amount)?;
        env.events().publish((symbol_short!("burn"), from), amount);
        Ok(())
    }

    pub fn burn_from(env: Env, spender: Address, from: Address, amount: i128) -> Result<(), Error> {
        spender.require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance(&env);

        storage::spend_allowance(&env, &from, &spender, amount)?;
        burn_from_balance(&env, &from, amount)?;
        env.events().publish((symbol_short!("burn"), from), amount);
        Ok(())
    }

    pub fn decimals(env: Env) -> Result<u32, Error> {
        Ok(storage::get_metadata(&env)?.decimal)
    }

    pub fn name(env: Env) -> Result<String, Error> {
        Ok(storage::get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, Error> {
        Ok(storage::get_metadata(&env)?.symbol)
    }

    // Cross-chain transfers. Outbound amounts are burned here and minted by the
    // peer deployment once the endpoint relays the message.

    pub fn set_endpoint(env: Env, admin: Address, endpoint: Address) -> Result<(), Error> {
        ensure_admin(&env, &admin)?;
        storage::set_endpoint(&env, &endpoint);
        env.events()
            .publish((symbol_short!("endpoint"),), endpoint);
        Ok(())
    }

    pub fn endpoint(env: Env) -> Option<Address> {
        storage::get_endpoint(&env)
    }

    /// Burn `amount` from `from` and emit the outbound message for chain
    /// `dst_chain`. Returns the message nonce.
    pub fn send_cross_chain(
        env: Env,
        from: Address,
        dst_chain: u32,
        recipient: Bytes,
        amount: i128,
    ) -> Result<u64, Error> {
        from.require_auth();
        check_nonnegative_amount(amount)?;
        if storage::get_endpoint(&env).is_none() {
            return Err(Error::EndpointNotSet);
        }
        storage::extend_instance(&env);

        burn_from_balance(&env, &from, amount)?;
        let nonce = storage::next_nonce(&env)?;

        log!(&env, "cross-chain send", from, dst_chain, amount, nonce);
        env.events().publish(
            (symbol_short!("xsend"), from, dst_chain),
            (recipient, amount, nonce),
        );
        Ok(nonce)
    }

    pub fn receive_cross_chain(
        env: Env,
        endpoint: Address,
        src_chain: u32,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        endpoint.require_auth();
        check_nonnegative_amount(amount)?;
        match storage::get_endpoint(&env) {
            Some(expected) if expected == endpoint => {}
            Some(_) => return Err(Error::NotEndpoint),
            None => return Err(Error::EndpointNotSet),
        }
        storage::extend_instance(&env);

        mint_to(&env, &to, amount)?;
        env.events()
            .publish((symbol_short!("xrecv"), to, src_chain), amount);
        Ok(())
    }
}
