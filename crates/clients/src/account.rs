//! Client for the account-abstraction provider (factory + entry point)

use crate::{
    error::ClientError,
    gen::{AccountFactory, EntryPointAPI},
};
use async_trait::async_trait;
use ethers::{
    prelude::SignerMiddleware,
    providers::Middleware,
    signers::Signer,
    types::{Address, TransactionReceipt, U256},
};
use opflow_primitives::Wallet;
use std::sync::Arc;
use tracing::{debug, info};

/// A trait for the account-abstraction provider resolving and deploying the
/// smart account of the logged-in identity
#[async_trait]
pub trait SmartAccountProvider: Send + Sync {
    /// Resolves the counterfactual smart account address of the owner
    async fn get_address(&self, owner: Address) -> Result<Address, ClientError>;

    /// Checks whether the smart account contract is deployed on chain
    async fn is_deployed(&self, account: Address) -> Result<bool, ClientError>;

    /// Deploys the smart account contract, paying gas from the given wallet
    async fn deploy_wallet_contract(
        &self,
        wallet: &Wallet,
    ) -> Result<TransactionReceipt, ClientError>;

    /// Fetches the smart account nonce from the entry point
    async fn get_nonce(&self, account: Address) -> Result<U256, ClientError>;
}

/// Smart account resolved through the canonical account factory
#[derive(Clone, Debug)]
pub struct SmartAccount<M: Middleware + 'static> {
    /// Ethereum execution client
    eth_client: Arc<M>,
    /// Account factory contract address
    factory: Address,
    /// Entry point contract address
    entry_point: Address,
    /// Account creation index (salt)
    index: U256,
}

impl<M: Middleware + 'static> SmartAccount<M> {
    /// Creates a new smart account client
    ///
    /// # Returns
    /// * `Self` - A new `SmartAccount` instance
    pub fn new(eth_client: Arc<M>, factory: Address, entry_point: Address, index: U256) -> Self {
        Self { eth_client, factory, entry_point, index }
    }
}

#[async_trait]
impl<M: Middleware + 'static> SmartAccountProvider for SmartAccount<M> {
    async fn get_address(&self, owner: Address) -> Result<Address, ClientError> {
        let factory = AccountFactory::new(self.factory, self.eth_client.clone());
        let address = factory
            .get_address(owner, self.index)
            .call()
            .await
            .map_err(|err| ClientError::Contract { inner: err.to_string() })?;
        debug!("Smart account of owner {owner:?} resolved to {address:?}");
        Ok(address)
    }

    async fn is_deployed(&self, account: Address) -> Result<bool, ClientError> {
        let code = self
            .eth_client
            .get_code(account, None)
            .await
            .map_err(|err| ClientError::Provider { inner: err.to_string() })?;
        Ok(!code.is_empty())
    }

    async fn deploy_wallet_contract(
        &self,
        wallet: &Wallet,
    ) -> Result<TransactionReceipt, ClientError> {
        let owner = wallet.signer.address();
        let client = SignerMiddleware::new(self.eth_client.clone(), wallet.signer.clone());
        let factory = AccountFactory::new(self.factory, Arc::new(client));

        let receipt = factory
            .create_account(owner, self.index)
            .send()
            .await
            .map_err(|err| ClientError::Contract { inner: err.to_string() })?
            .await
            .map_err(|err| ClientError::Provider { inner: err.to_string() })?
            .ok_or_else(|| ClientError::Provider {
                inner: "deployment transaction dropped from the mempool".into(),
            })?;

        info!(
            "Smart account of owner {owner:?} deployed, tx hash: {:?}",
            receipt.transaction_hash
        );
        Ok(receipt)
    }

    async fn get_nonce(&self, account: Address) -> Result<U256, ClientError> {
        let entry_point = EntryPointAPI::new(self.entry_point, self.eth_client.clone());
        entry_point
            .get_nonce(account, U256::zero())
            .call()
            .await
            .map_err(|err| ClientError::Contract { inner: err.to_string() })
    }
}
