#![allow(clippy::unwrap_used)]

use crate::assert_contract_error;
use crate::utils::*;
use llama_token::{Error, LlamaToken, LlamaTokenClient};
use soroban_sdk::{testutils::Address as _, vec, Address, Bytes, String};

const HOME_CHAIN: u32 = 1;
const PEER_CHAIN: u32 = 42_161;

/// An outbound send burned on one deployment is re-minted on the peer when
/// the relaying endpoint delivers it.
#[test]
fn test_bridge_round_trip_preserves_supply() {
    let env = new_env();
    let actors = Actors::generate(&env);
    let home = deploy_llama(&env, &actors);

    let peer_id = env.register_contract(None, LlamaToken);
    let peer = LlamaTokenClient::new(&env, &peer_id);
    peer.initialize(
        &actors.admin,
        &crate::utils::constants::DECIMALS,
        &String::from_str(&env, "LamboLlama"),
        &String::from_str(&env, "LLAMA"),
        &vec![&env],
    );

    let relayer = Address::generate(&env);
    home.set_endpoint(&actors.admin, &relayer);
    peer.set_endpoint(&actors.admin, &relayer);

    let traveller = Address::generate(&env);
    let destination = Bytes::from_array(&env, &[7u8; 32]);
    let supply_before = home.total_supply();

    let nonce = home.send_cross_chain(&actors.team, &PEER_CHAIN, &destination, &5_000);
    assert_eq!(nonce, 0);
    assert_eq!(home.total_supply(), supply_before - 5_000);

    assert_contract_error!(
        peer.try_receive_cross_chain(&actors.admin, &HOME_CHAIN, &traveller, &5_000),
        Error::NotEndpoint
    );
    peer.receive_cross_chain(&relayer, &HOME_CHAIN, &traveller, &5_000);

    assert_eq!(peer.balance(&traveller), 5_000);
    assert_eq!(home.total_supply() + peer.total_supply(), supply_before);
}
