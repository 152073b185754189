use thiserror::Error;

/// Errors thrown by the external service clients
#[derive(Debug, Error)]
pub enum ClientError {
    /// Auth provider rejected the login or returned a malformed session
    #[error("auth error: {inner}")]
    Auth {
        /// The inner error message
        inner: String,
    },
    /// Error from the chain RPC provider
    #[error("provider error: {inner}")]
    Provider {
        /// The inner error message
        inner: String,
    },
    /// Smart contract call failed
    #[error("contract error: {inner}")]
    Contract {
        /// The inner error message
        inner: String,
    },
    /// JSON-RPC transport error
    #[error("rpc error: {inner}")]
    Rpc {
        /// The inner error message
        inner: String,
    },
    /// HTTP error while talking to the auth provider
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
