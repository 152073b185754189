use ethers::types::Address;

/// Static configuration of one session
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    /// Entry point contract address
    pub entry_point: Address,
    /// Chain id of the blockchain network the session operates on
    pub chain_id: u64,
}

impl SessionConfig {
    /// Creates a new session configuration
    pub fn new(entry_point: Address, chain_id: u64) -> Self {
        Self { entry_point, chain_id }
    }
}
