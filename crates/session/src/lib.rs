//! Session orchestration for sponsored user operations
//!
//! The [Session](Session) logs a user in through the social-auth provider,
//! resolves the smart account of the session identity, and submits one
//! sponsored user operation through the bundler/paymaster pipeline.

mod config;
mod session;

pub use config::SessionConfig;
pub use session::{AccountInfo, Session};
