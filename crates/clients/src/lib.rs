//! Typed clients for the external services a sponsored user operation flows
//! through: the social-auth provider, the smart account factory and entry
//! point, the bundler, and the paymaster.

pub mod account;
pub mod auth;
pub mod bundler;
mod error;
pub mod gen;
pub mod paymaster;

pub use account::{SmartAccount, SmartAccountProvider};
pub use auth::{AppCredentials, AuthClient, AuthProvider};
pub use bundler::{
    connect_http, BundlerApiClient, BundlerApiServer, GasPriceApiClient, GasPriceApiServer,
};
pub use error::ClientError;
pub use paymaster::{PaymasterApiClient, PaymasterApiServer};
