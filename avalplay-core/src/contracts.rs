//! The two pre-deployed contracts the session talks to.
//!
//! Only the calls listed here are ever encoded; the contracts themselves are
//! opaque.

use serde::{Deserialize, Serialize};

use crate::abi;
use crate::address::Address;

/// NFT contract on Fuji.
pub const NFT_CONTRACT_ADDRESS: Address = Address::new([
    0x4c, 0x71, 0xfb, 0x79, 0xcd, 0xc3, 0x12, 0xff, 0xc5, 0x04, 0x96, 0x0f, 0xbb, 0x02, 0x48,
    0xd0, 0xfb, 0x92, 0x55, 0xfb,
]);

/// Claimable token contract on Fuji.
pub const TOKEN_CONTRACT_ADDRESS: Address = Address::new([
    0xa1, 0xd4, 0x82, 0xf2, 0x7b, 0x4c, 0x10, 0xaa, 0xb9, 0x60, 0xc2, 0x92, 0x79, 0x65, 0xe1,
    0xbe, 0xce, 0xea, 0xd4, 0x56,
]);

pub const MINT_SIGNATURE: &str = "mint()";
pub const CLAIM_SIGNATURE: &str = "claim()";
pub const BALANCE_OF_SIGNATURE: &str = "balanceOf(address)";
pub const NAME_SIGNATURE: &str = "name()";

/// Where the NFT and token contracts live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
    #[serde(default = "default_nft")]
    pub nft: Address,

    #[serde(default = "default_token")]
    pub token: Address,
}

fn default_nft() -> Address {
    NFT_CONTRACT_ADDRESS
}

fn default_token() -> Address {
    TOKEN_CONTRACT_ADDRESS
}

impl Default for ContractAddresses {
    fn default() -> Self {
        Self {
            nft: default_nft(),
            token: default_token(),
        }
    }
}

/// `mint()` calldata.
pub fn mint_calldata() -> Vec<u8> {
    abi::encode_call(MINT_SIGNATURE)
}

/// `claim()` calldata.
pub fn claim_calldata() -> Vec<u8> {
    abi::encode_call(CLAIM_SIGNATURE)
}

/// `balanceOf(owner)` calldata.
pub fn balance_of_calldata(owner: &Address) -> Vec<u8> {
    abi::encode_address_call(BALANCE_OF_SIGNATURE, owner)
}

/// `name()` calldata.
pub fn name_calldata() -> Vec<u8> {
    abi::encode_call(NAME_SIGNATURE)
}
