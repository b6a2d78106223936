//! Test utilities and helpers for Crypto Devs tests

#![allow(dead_code)]

pub mod mock_crypto_devs;

pub use mock_crypto_devs::{MockCryptoDevs, MockCryptoDevsHostRef};

use odra::casper_types::{U256, U512};
use odra::host::{Deployer, HostEnv, NoArgs};

use crypto_devs::crypto_dev_token::{ONE_TOKEN, TOKEN_PRICE};

/// Whole tokens expressed in base units
pub fn tokens(amount: u64) -> U256 {
    U256::from(amount) * U256::from(ONE_TOKEN)
}

/// Motes needed to buy `amount` whole tokens
pub fn price_of(amount: u64) -> U512 {
    U512::from(TOKEN_PRICE) * U512::from(amount)
}

/// Deploy a mock NFT contract for testing
pub fn deploy_mock_crypto_devs(env: &HostEnv) -> MockCryptoDevsHostRef {
    MockCryptoDevs::deploy(env, NoArgs)
}
