//! Client for the paymaster RPC

use ethers::types::Address;
use jsonrpsee::{core::RpcResult, proc_macros::rpc};
use opflow_primitives::{SponsorUserOperation, UserOperation};

/// The `pm` namespace RPC methods the paymaster exposes to clients
#[rpc(server, client, namespace = "pm")]
pub trait PaymasterApi {
    /// Request gas sponsorship for a [UserOperation](UserOperation).
    ///
    /// # Arguments
    /// * `user_operation: UserOperation` - The [UserOperation](UserOperation) to be sponsored
    ///   (with a placeholder signature).
    /// * `entry_point: Address` - The address of the entry point.
    ///
    /// # Returns
    /// * `RpcResult<SponsorUserOperation>` - The sponsorship fields to merge into the operation
    ///   before signing.
    #[method(name = "sponsorUserOperation")]
    async fn sponsor_user_operation(
        &self,
        user_operation: UserOperation,
        entry_point: Address,
    ) -> RpcResult<SponsorUserOperation>;
}
