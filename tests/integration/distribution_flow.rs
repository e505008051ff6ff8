#![allow(clippy::unwrap_used)]

use crate::assert_contract_error;
use crate::utils::constants::*;
use crate::utils::*;
use airdrop::{AirdropContract, AirdropContractClient};
use merkle_airdrop::{merkle, MerkleAirdropContract, MerkleAirdropContractClient};
use soroban_sdk::{testutils::Address as _, vec, Address};
use vesting::{VestingContract, VestingContractClient};

#[test]
fn test_team_vesting_from_llama_allocation() {
    let env = new_env();
    let actors = Actors::generate(&env);
    let llama = deploy_llama(&env, &actors);

    let vesting_id = env.register_contract(None, VestingContract);
    let vesting = VestingContractClient::new(&env, &vesting_id);
    vesting.initialize(&actors.team, &llama.address);
    llama.transfer(&actors.team, &vesting_id, &as_i128(TEAM_SUPPLY));

    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let start = now(&env) + DAY;
    let duration = 365 * DAY;
    vesting.set_vesting_schedule(&actors.team, &alice, &(TEAM_SUPPLY / 4), &start, &duration);
    vesting.set_vesting_schedule(&actors.team, &bob, &(TEAM_SUPPLY / 4), &start, &duration);
    vesting.fix(&actors.team);

    assert_contract_error!(
        vesting.try_withdraw(&actors.team),
        vesting::Error::ContractFixed
    );
    assert_contract_error!(
        vesting.try_claim_tokens(&alice),
        vesting::Error::VestingNotStarted
    );

    set_time(&env, start + duration / 4);
    let quarter = vesting.claim_tokens(&alice);
    assert_eq!(quarter, TEAM_SUPPLY / 16);

    set_time(&env, start + duration);
    let rest = vesting.claim_tokens(&alice);
    assert_eq!(quarter + rest, TEAM_SUPPLY / 4);
    assert_eq!(vesting.claim_tokens(&bob), TEAM_SUPPLY / 4);

    assert_eq!(llama.balance(&alice), as_i128(TEAM_SUPPLY / 4));
    assert_eq!(
        llama.balance(&vesting_id),
        as_i128(TEAM_SUPPLY - TEAM_SUPPLY / 2)
    );
}

#[test]
fn test_timed_airdrop_pays_out_llama() {
    let env = new_env();
    let actors = Actors::generate(&env);
    let llama = deploy_llama(&env, &actors);

    let airdrop_id = env.register_contract(None, AirdropContract);
    let airdrop = AirdropContractClient::new(&env, &airdrop_id);
    let claim_start = now(&env) + DAY;
    let vesting_period = 180 * DAY;
    airdrop.initialize(
        &actors.treasury,
        &llama.address,
        &claim_start,
        &(claim_start + 365 * DAY),
        &vesting_period,
    );
    llama.transfer(&actors.treasury, &airdrop_id, &as_i128(AIRDROP_SUPPLY));

    let farmers = [Address::generate(&env), Address::generate(&env)];
    airdrop.set_recipients(
        &actors.treasury,
        &vec![&env, farmers[0].clone(), farmers[1].clone()],
        &vec![&env, units(600), units(400)],
    );

    set_time(&env, claim_start + vesting_period / 2);
    assert_eq!(airdrop.claim(&farmers[0]), units(300));
    set_time(&env, claim_start + vesting_period);
    assert_eq!(airdrop.claim(&farmers[0]), units(300));
    assert_eq!(airdrop.claim(&farmers[1]), units(400));

    assert_eq!(llama.balance(&farmers[0]), as_i128(units(600)));
    assert_eq!(
        llama.balance(&airdrop_id),
        as_i128(AIRDROP_SUPPLY - units(1_000))
    );

    // leftovers go back to the treasury
    airdrop.withdraw(
        &actors.treasury,
        &llama.address,
        &as_i128(AIRDROP_SUPPLY - units(1_000)),
    );
    assert_eq!(llama.balance(&airdrop_id), 0);
}

#[test]
fn test_merkle_airdrop_pays_out_llama() {
    let env = new_env();
    let actors = Actors::generate(&env);
    let llama = deploy_llama(&env, &actors);

    let first = Address::generate(&env);
    let second = Address::generate(&env);
    let first_leaf = merkle::leaf_hash(&env, &first, units(250));
    let second_leaf = merkle::leaf_hash(&env, &second, units(750));
    let root = merkle::hash_pair(&env, &first_leaf, &second_leaf);

    let drop_id = env.register_contract(None, MerkleAirdropContract);
    let drop = MerkleAirdropContractClient::new(&env, &drop_id);
    drop.initialize(&actors.treasury, &llama.address, &root);
    llama.transfer(&actors.treasury, &drop_id, &as_i128(AIRDROP_SUPPLY));

    drop.claim(&first, &units(250), &vec![&env, second_leaf.clone()]);
    drop.claim(&second, &units(750), &vec![&env, first_leaf.clone()]);
    assert_contract_error!(
        drop.try_claim(&first, &units(250), &vec![&env, second_leaf]),
        merkle_airdrop::Error::AlreadyClaimed
    );

    assert_eq!(llama.balance(&first), as_i128(units(250)));
    assert_eq!(llama.balance(&second), as_i128(units(750)));
    assert_eq!(
        llama.balance(&drop_id),
        as_i128(AIRDROP_SUPPLY - units(1_000))
    );
}
