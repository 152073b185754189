use super::args::SessionArgs;
use clap::Parser;
use ethers::{providers::Middleware, utils::format_ether};
use eyre::WrapErr;
use opflow_clients::{connect_http, AppCredentials, AuthClient, SmartAccount};
use opflow_primitives::provider::create_http_provider;
use opflow_session::{Session, SessionConfig};
use std::{env, sync::Arc};
use tracing::info;

/// Starts a login session and runs the contextual account action
#[derive(Debug, Clone, Parser)]
pub struct SessionCommand {
    /// All session args
    #[clap(flatten)]
    args: SessionArgs,
}

impl SessionCommand {
    /// Execute the command
    pub async fn execute(self) -> eyre::Result<()> {
        let args = self.args;

        let credentials = AppCredentials {
            project_id: env::var("OPFLOW_PROJECT_ID")
                .wrap_err("OPFLOW_PROJECT_ID env var not set")?,
            client_key: env::var("OPFLOW_CLIENT_KEY")
                .wrap_err("OPFLOW_CLIENT_KEY env var not set")?,
            app_id: env::var("OPFLOW_APP_ID").wrap_err("OPFLOW_APP_ID env var not set")?,
        };

        let eth_client = Arc::new(create_http_provider(&args.eth_client_address).await?);
        let chain_id = eth_client.get_chainid().await?.as_u64();
        info!("Connected to {}, chain id {chain_id}", args.eth_client_address);

        let auth = AuthClient::new(&args.auth_url, credentials, chain_id)?;
        let account =
            SmartAccount::new(eth_client.clone(), args.factory, args.entry_point, args.index);
        let bundler = connect_http(&args.bundler_url)?;
        let paymaster = connect_http(&args.paymaster_url)?;

        let mut session = Session::new(
            SessionConfig::new(args.entry_point, chain_id),
            auth,
            account,
            eth_client,
            bundler,
            paymaster,
        );

        session.login(args.auth_type).await?;
        if let Some(profile) = session.profile() {
            println!("Signed in as {}", profile.name);
        }

        let info = session
            .account_info()
            .ok_or_else(|| eyre::eyre!("account info not resolved after login"))?
            .clone();
        println!("Smart account: {:?}", info.address);
        println!("Balance: {} ETH", format_ether(info.balance));

        if info.deployed {
            let uo_hash = session.execute_user_operation().await?;
            println!("User operation successful, hash: {:?}", uo_hash.0);
        } else {
            match session.deploy_account().await? {
                Some(receipt) => {
                    println!("Account deployed, tx hash: {:?}", receipt.transaction_hash)
                }
                None => println!("Account already deployed"),
            }
        }

        Ok(())
    }
}
