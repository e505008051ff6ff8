use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

/// Leaf committed to by the tree: `sha256(xdr(claimant) || amount_be)`.
pub fn leaf_hash(env: &Env, claimant: &Address, amount: u128) -> BytesN<32> {
    let mut payload = Bytes::new(env);
    payload.append(&claimant.clone().to_xdr(env));
    payload.append(&Bytes::from_array(env, &amount.to_be_bytes()));
    env.crypto().sha256(&payload).into()
}

/// Parent of two nodes, hashed smaller-first so proofs need no side flags.
pub fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (left, right) = if a.to_array() <= b.to_array() {
        (a, b)
    } else {
        (b, a)
    };

    let mut payload = Bytes::new(env);
    payload.append(&Bytes::from_array(env, &left.to_array()));
    payload.append(&Bytes::from_array(env, &right.to_array()));
    env.crypto().sha256(&payload).into()
}

pub fn verify_proof(env: &Env, proof: &Vec<BytesN<32>>, root: &BytesN<32>, leaf: BytesN<32>) -> bool {
    let mut node = leaf;
    for sibling in proof.iter() {
        node = hash_pair(env, &node, &sibling);
    }
    node == *root
}
