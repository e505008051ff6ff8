#![no_std]

pub mod merkle;


use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, log, symbol_short, token,
    Address, BytesN, Env, Vec,
};

contractmeta!(
    key = "Description",
    val = "One-shot airdrop claims proven against a Merkle root"
);

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct DistributorConfig {
    pub owner: Address,
    pub token: Address,
    pub merkle_root: BytesN<32>,
}

#[contracttype]
pub enum DataKey {
    Config,
    Claimed(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotOwner = 3,
    AlreadyClaimed = 4,
    InvalidMerkleProof = 5,
    ZeroAmount = 6,
    AmountOverflow = 7,
}

#[contract]
pub struct MerkleAirdropContract;

fn load_config(env: &Env) -> Result<DistributorConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

fn is_claimed(env: &Env, claimant: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Claimed(claimant.clone()))
        .unwrap_or(false)
}

#[contractimpl]
impl MerkleAirdropContract {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        merkle_root: BytesN<32>,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        let config = DistributorConfig {
            owner,
            token,
            merkle_root,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        Ok(())
    }

    /// Claim `amount` by presenting the sibling path from the claimant's leaf
    /// to the stored root.
    pub fn claim(
        env: Env,
        claimant: Address,
        amount: u128,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), Error> {
        claimant.require_auth();
        let config = load_config(&env)?;

        if amount == 0 {
            return Err(Error::ZeroAmount);
        }
        if is_claimed(&env, &claimant) {
            return Err(Error::AlreadyClaimed);
        }

        let leaf = merkle::leaf_hash(&env, &claimant, amount);
        if !merkle::verify_proof(&env, &proof, &config.merkle_root, leaf) {
            log!(&env, "rejected merkle proof", claimant, amount);
            return Err(Error::InvalidMerkleProof);
        }

        env.storage()
            .persistent()
            .set(&DataKey::Claimed(claimant.clone()), &true);

        let payout = i128::try_from(amount).map_err(|_| Error::AmountOverflow)?;
        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &claimant,
            &payout,
        );

        env.events()
            .publish((symbol_short!("claimed"), claimant), amount);
        Ok(())
    }

    /// Replace the root. Claims already made stay recorded.
    pub fn set_merkle_root(env: Env, owner: Address, merkle_root: BytesN<32>) -> Result<(), Error> {
        owner.require_auth();
        let mut config = load_config(&env)?;
        if config.owner != owner {
            return Err(Error::NotOwner);
        }

        config.merkle_root = merkle_root.clone();
        env.storage().instance().set(&DataKey::Config, &config);
        env.events().publish((symbol_short!("new_root"),), merkle_root);
        Ok(())
    }

    pub fn is_claimed(env: Env, claimant: Address) -> bool {
        is_claimed(&env, &claimant)
    }

    pub fn merkle_root(env: Env) -> Result<BytesN<32>, Error> {
        Ok(load_config(&env)?.merkle_root)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        Ok(load_config(&env)?.token)
    }
}
