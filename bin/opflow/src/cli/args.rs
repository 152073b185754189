use crate::utils::{parse_address, parse_auth_type, parse_u256};
use clap::Parser;
use ethers::types::{Address, U256};
use opflow_primitives::{
    constants::{entry_point, factory},
    AuthType,
};

/// Session CLI args
#[derive(Debug, Clone, Parser)]
pub struct SessionArgs {
    /// Preferred auth type for the login.
    ///
    /// By default, this option is set to `google`.
    #[clap(long, default_value = "google", value_parser=parse_auth_type)]
    pub auth_type: AuthType,

    /// Ethereum execution client RPC endpoint.
    #[clap(long, default_value = "http://127.0.0.1:8545")]
    pub eth_client_address: String,

    /// Auth provider endpoint.
    #[clap(long)]
    pub auth_url: String,

    /// Bundler RPC endpoint.
    #[clap(long)]
    pub bundler_url: String,

    /// Paymaster RPC endpoint.
    #[clap(long)]
    pub paymaster_url: String,

    /// Entry point address.
    #[clap(long, default_value = entry_point::ADDRESS, value_parser=parse_address)]
    pub entry_point: Address,

    /// Account factory address.
    #[clap(long, default_value = factory::ADDRESS, value_parser=parse_address)]
    pub factory: Address,

    /// Smart account creation index (salt).
    ///
    /// By default, this option is set to `0`.
    #[clap(long, default_value = "0", value_parser=parse_u256)]
    pub index: U256,
}
