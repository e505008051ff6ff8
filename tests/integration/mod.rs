mod cross_chain_flow;
mod distribution_flow;
