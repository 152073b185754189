//! Client for the bundler RPC

use crate::error::ClientError;
use ethers::types::{Address, U64};
use jsonrpsee::{
    core::RpcResult,
    http_client::{HttpClient, HttpClientBuilder},
    proc_macros::rpc,
};
use opflow_primitives::{UserOperation, UserOperationGasPrice, UserOperationHash};

/// The ERC-4337 `eth` namespace RPC methods the bundler exposes to clients
#[rpc(server, client, namespace = "eth")]
pub trait BundlerApi {
    /// Retrieve the current [EIP-155](https://eips.ethereum.org/EIPS/eip-155) chain ID.
    ///
    /// # Returns
    /// * `RpcResult<U64>` - The chain ID as a U64.
    #[method(name = "chainId")]
    async fn chain_id(&self) -> RpcResult<U64>;

    /// Send a [UserOperation](UserOperation).
    ///
    /// # Arguments
    /// * `user_operation: UserOperation` - The [UserOperation](UserOperation) to be sent.
    /// * `entry_point: Address` - The address of the entry point.
    ///
    /// # Returns
    /// * `RpcResult<UserOperationHash>` - The hash of the sent [UserOperation](UserOperation).
    #[method(name = "sendUserOperation")]
    async fn send_user_operation(
        &self,
        user_operation: UserOperation,
        entry_point: Address,
    ) -> RpcResult<UserOperationHash>;
}

/// The gas price oracle the bundler exposes in the `pimlico` namespace
#[rpc(server, client, namespace = "pimlico")]
pub trait GasPriceApi {
    /// Retrieve the tiered gas price quote for user operations.
    ///
    /// # Returns
    /// * `RpcResult<UserOperationGasPrice>` - Slow, standard, and fast fee tiers.
    #[method(name = "getUserOperationGasPrice")]
    async fn get_user_operation_gas_price(&self) -> RpcResult<UserOperationGasPrice>;
}

/// Creates a JSON-RPC client with HTTP connection
pub fn connect_http(url: &str) -> Result<HttpClient, ClientError> {
    HttpClientBuilder::default()
        .build(url)
        .map_err(|err| ClientError::Rpc { inner: err.to_string() })
}
