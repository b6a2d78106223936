//! Deployment configuration
//!
//! Constants are read once from a TOML table of `KEY = "value"` pairs and
//! turned into a [`DeployConfig`] before anything touches the network.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use odra::prelude::Address;
use serde::Deserialize;

use crate::errors::DeploymentFailure;

/// Constant holding the address of the already deployed NFT contract
pub const CRYPTO_DEVS_NFT_CONTRACT_ADDRESS: &str = "CRYPTO_DEVS_NFT_CONTRACT_ADDRESS";
/// Optional constant overriding the deployment gas, in motes
pub const CRYPTO_DEV_TOKEN_DEPLOY_GAS: &str = "CRYPTO_DEV_TOKEN_DEPLOY_GAS";
/// Gas used when no override is set (300 CSPR)
pub const DEFAULT_DEPLOY_GAS: u64 = 300_000_000_000;
/// Where the deploy script looks for constants by default
pub const DEFAULT_CONSTANTS_PATH: &str = "constants/index.toml";

/// Named constants shared by the deployment scripts
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Constants(BTreeMap<String, String>);

impl Constants {
    pub fn load(path: &Path) -> Result<Self, DeploymentFailure> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| DeploymentFailure::ConstantsUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        toml::from_str(&contents).map_err(|source| DeploymentFailure::ConstantsMalformed {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// Everything the token deployment needs, resolved up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    /// Constructor argument of the token
    pub crypto_devs_nft: Address,
    /// Gas attached to the deploy, in motes
    pub gas: u64,
}

impl DeployConfig {
    pub fn from_constants(constants: &Constants) -> Result<Self, DeploymentFailure> {
        let raw = constants
            .get(CRYPTO_DEVS_NFT_CONTRACT_ADDRESS)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(DeploymentFailure::MissingConstant(CRYPTO_DEVS_NFT_CONTRACT_ADDRESS))?;
        let crypto_devs_nft =
            Address::from_str(raw).map_err(|_| DeploymentFailure::InvalidAddress {
                key: CRYPTO_DEVS_NFT_CONTRACT_ADDRESS,
                value: raw.to_string(),
            })?;

        let gas = match constants.get(CRYPTO_DEV_TOKEN_DEPLOY_GAS) {
            None => DEFAULT_DEPLOY_GAS,
            Some(raw) => raw
                .trim()
                .replace('_', "")
                .parse()
                .map_err(|_| DeploymentFailure::InvalidConstant {
                    key: CRYPTO_DEV_TOKEN_DEPLOY_GAS,
                    value: raw.to_string(),
                })?,
        };

        Ok(Self {
            crypto_devs_nft,
            gas,
        })
    }
}
