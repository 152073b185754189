use ethers::types::{Address, U256};
use opflow_primitives::AuthType;
use std::str::FromStr;

/// Parses address from string
pub fn parse_address(s: &str) -> Result<Address, String> {
    Address::from_str(s).map_err(|_| format!("String {s} is not a valid address"))
}

/// Parses U256 from string
pub fn parse_u256(s: &str) -> Result<U256, String> {
    U256::from_str_radix(s, 10).map_err(|_| format!("String {s} is not a valid U256"))
}

/// Parses auth type from string
pub fn parse_auth_type(s: &str) -> Result<AuthType, String> {
    AuthType::from_str(s).map_err(|_| format!("String {s} is not a valid auth type"))
}
