use crate::config::SessionConfig;
use ethers::{
    providers::Middleware,
    signers::Signer,
    types::{Address, Bytes, TransactionReceipt, U256},
    utils::parse_ether,
};
use eyre::eyre;
use opflow_clients::{
    gen::execute::ExecuteCall, AuthProvider, BundlerApiClient, GasPriceApiClient,
    PaymasterApiClient, SmartAccountProvider,
};
use opflow_primitives::{
    constants::demo, AuthSession, AuthType, UserOperation, UserOperationHash, UserProfile,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Smart account state resolved for the logged-in identity
#[derive(Clone, Debug)]
pub struct AccountInfo {
    /// Smart account address (counterfactual until deployed)
    pub address: Address,
    /// Latest fetched balance (wei)
    pub balance: U256,
    /// Whether the smart account contract is deployed on chain
    pub deployed: bool,
}

/// The `Session` orchestrates one login and the account actions that follow
/// it: refreshing account info, deploying the smart account, and submitting a
/// sponsored user operation.
///
/// All state is written through `&mut self`, so at most one operation is in
/// flight at a time.
pub struct Session<M, A, W, B, P>
where
    M: Middleware + 'static,
    A: AuthProvider,
    W: SmartAccountProvider,
    B: BundlerApiClient + GasPriceApiClient + Send + Sync,
    P: PaymasterApiClient + Send + Sync,
{
    /// Session configuration
    config: SessionConfig,
    /// Auth provider establishing the session identity
    auth: A,
    /// Account-abstraction provider
    account: W,
    /// Ethereum execution client
    eth_client: Arc<M>,
    /// Bundler RPC client
    bundler: B,
    /// Paymaster RPC client
    paymaster: P,
    /// Identity established by the last login
    session: Option<AuthSession>,
    /// Smart account state of the session identity
    info: Option<AccountInfo>,
}

impl<M, A, W, B, P> Session<M, A, W, B, P>
where
    M: Middleware + 'static,
    A: AuthProvider,
    W: SmartAccountProvider,
    B: BundlerApiClient + GasPriceApiClient + Send + Sync,
    P: PaymasterApiClient + Send + Sync,
{
    /// Creates a new session over the given providers
    ///
    /// # Returns
    /// * `Self` - A new `Session` instance
    pub fn new(
        config: SessionConfig,
        auth: A,
        account: W,
        eth_client: Arc<M>,
        bundler: B,
        paymaster: P,
    ) -> Self {
        Self { config, auth, account, eth_client, bundler, paymaster, session: None, info: None }
    }

    /// Logs the user in with the preferred auth method and refreshes the
    /// account info of the resolved identity
    pub async fn login(&mut self, auth_type: AuthType) -> eyre::Result<()> {
        let session = self.auth.login(auth_type).await?;
        info!("Login successful, user: {}", session.profile.name);

        self.session = Some(session);
        self.refresh_account_info().await?;

        Ok(())
    }

    /// Refreshes the smart account address, balance, and deployment flag of
    /// the session identity, in that order
    ///
    /// The address is derived once per session; later refreshes reuse it. A
    /// failure at any step leaves the downstream state untouched.
    pub async fn refresh_account_info(&mut self) -> eyre::Result<AccountInfo> {
        let session =
            self.session.as_ref().ok_or_else(|| eyre!("no active session, login first"))?;
        let owner = session.wallet.signer.address();

        let address = match &self.info {
            Some(info) => info.address,
            None => self.account.get_address(owner).await?,
        };
        let balance = self
            .eth_client
            .get_balance(address, None)
            .await
            .map_err(|err| eyre!("balance fetch failed: {err}"))?;
        let deployed = self.account.is_deployed(address).await?;

        debug!("Account info refreshed: address {address:?}, balance {balance}, deployed {deployed}");
        let info = AccountInfo { address, balance, deployed };
        self.info = Some(info.clone());
        Ok(info)
    }

    /// Deploys the smart account contract of the session identity
    ///
    /// Idempotent by construction: the deployment status is re-checked first
    /// and the call no-ops (returns `None`) when the account is already
    /// deployed.
    pub async fn deploy_account(&mut self) -> eyre::Result<Option<TransactionReceipt>> {
        let session =
            self.session.as_ref().ok_or_else(|| eyre!("no active session, login first"))?;
        let address = self
            .info
            .as_ref()
            .ok_or_else(|| eyre!("account info not resolved yet"))?
            .address;

        if self.account.is_deployed(address).await? {
            info!("Smart account {address:?} already deployed, nothing to do");
            if let Some(info) = self.info.as_mut() {
                info.deployed = true;
            }
            return Ok(None);
        }

        let receipt = self.account.deploy_wallet_contract(&session.wallet).await?;
        info!("Smart account {address:?} deployed, tx hash: {:?}", receipt.transaction_hash);
        if let Some(info) = self.info.as_mut() {
            info.deployed = true;
        }
        Ok(Some(receipt))
    }

    /// Builds, sponsors, signs, and submits the demonstration user operation
    ///
    /// The nonce and gas price are fetched concurrently; sponsorship is
    /// requested before the operation is hashed and signed, and the signature
    /// is in place before submission.
    ///
    /// # Returns
    /// * `UserOperationHash` - The hash of the submitted user operation
    pub async fn execute_user_operation(&mut self) -> eyre::Result<UserOperationHash> {
        let session =
            self.session.as_ref().ok_or_else(|| eyre!("no active session, login first"))?;
        let sender = self
            .info
            .as_ref()
            .ok_or_else(|| eyre!("account info not resolved yet"))?
            .address;
        let entry_point = self.config.entry_point;

        let (nonce, gas_price) = tokio::try_join!(
            async { self.account.get_nonce(sender).await.map_err(eyre::Report::from) },
            async {
                self.bundler.get_user_operation_gas_price().await.map_err(eyre::Report::from)
            },
        )?;
        debug!("Nonce: {nonce}, gas price: {gas_price:?}");

        let call_data = ExecuteCall::new(
            demo::BURN_ADDRESS.parse()?,
            parse_ether(demo::TRANSFER_VALUE)?,
            Bytes::default(),
        );

        let uo = UserOperation::default()
            .sender(sender)
            .nonce(nonce)
            .call_data(call_data.encode().into())
            .max_fee_per_gas(gas_price.fast.max_fee_per_gas)
            .max_priority_fee_per_gas(gas_price.fast.max_priority_fee_per_gas)
            .signature(demo::DUMMY_SIGNATURE.parse()?);

        let sponsorship = self.paymaster.sponsor_user_operation(uo.clone(), entry_point).await?;
        debug!("Sponsorship granted: {sponsorship:?}");
        let uo = uo.with_sponsorship(&sponsorship);

        let uo = session.wallet.sign_user_operation(&uo, &entry_point, self.config.chain_id).await?;

        let uo_hash = self.bundler.send_user_operation(uo, entry_point).await?;
        info!("User operation successful, hash: {:?}", uo_hash.0);

        Ok(uo_hash)
    }

    /// Profile of the logged-in user, if a session is active
    pub fn profile(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|session| &session.profile)
    }

    /// Smart account state of the session identity, if resolved
    pub fn account_info(&self) -> Option<&AccountInfo> {
        self.info.as_ref()
    }
}
