//! Smart account session primitive types
//!
//! This crate contains the ERC-4337 user operation type, the session wallet,
//! and the helper types exchanged with the bundler and paymaster services.

pub mod auth;
pub mod constants;
pub mod provider;
mod user_operation;
mod utils;
mod wallet;

pub use auth::{AuthSession, AuthType, UserProfile};
pub use user_operation::{
    GasFee, SponsorUserOperation, UserOperation, UserOperationGasPrice, UserOperationHash,
};
pub use wallet::Wallet;
