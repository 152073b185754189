//! Session orchestration constants

/// Entry point smart contract
pub mod entry_point {
    /// Address of the entry point smart contract
    pub const ADDRESS: &str = "0x5FF137D4b0FDCD49DcA30c7CF57E578a026d2789";
    /// Version of the entry point smart contract
    pub const VERSION: &str = "0.6.0";
}

/// Smart account factory
pub mod factory {
    /// Address of the canonical simple account factory
    pub const ADDRESS: &str = "0x9406Cc6185a346906296840746125a0E44976454";
}

/// Demonstration transfer submitted by the execute action
pub mod demo {
    /// Recipient of the demonstration transfer
    pub const BURN_ADDRESS: &str = "0x000000000000000000000000000000000000dEaD";
    /// Value of the demonstration transfer (ether units)
    pub const TRANSFER_VALUE: &str = "0.001";
    /// Placeholder signature submitted to the paymaster while the operation
    /// is being sponsored (the real signature is not known yet at that point)
    pub const DUMMY_SIGNATURE: &str = "0xfffffffffffffffffffffffffffffff0000000000000000000000000000000007aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1c";
}
