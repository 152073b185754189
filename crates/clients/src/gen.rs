//! Contract bindings for the account factory and entry point

use ethers::contract::abigen;

abigen!(
    AccountFactory,
    r#"[
        function createAccount(address owner, uint256 salt) public returns (address)
        function getAddress(address owner, uint256 salt) public view returns (address)
    ]"#
);

abigen!(
    EntryPointAPI,
    r#"[
        function getNonce(address sender, uint192 key) public view returns (uint256 nonce)
        function balanceOf(address account) public view returns (uint256)
    ]"#
);

pub mod execute {
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::{sol, SolCall};
    use ethers::types::{Address as EAddress, Bytes as EBytes, U256 as EU256};

    sol! {function executeCall(address to, uint256 value, bytes calldata data);}

    /// Encoder for the smart account's executeCall entry
    pub struct ExecuteCall(executeCallCall);

    impl ExecuteCall {
        pub fn new(to: EAddress, value: EU256, data: EBytes) -> Self {
            Self(executeCallCall {
                to: Address::from(to.0),
                value: U256::from_limbs(value.0),
                data: data.to_vec(),
            })
        }

        pub fn encode(&self) -> Vec<u8> {
            self.0.abi_encode()
        }
    }
}
