//! Error definitions for the Crypto Devs token and its deployment

use odra::prelude::*;

/// CryptoDevToken errors
#[odra::odra_error]
pub enum Error {
    /// Attached value does not cover the token price
    InsufficientPayment = 1,
    /// Minting would exceed the maximum total supply
    ExceedsMaxSupply = 2,
    /// Caller does not hold any Crypto Devs NFT
    NoNftsOwned = 3,
    /// Every NFT held by the caller has already been claimed
    AllTokensClaimed = 4,
    /// Caller is not the contract owner
    NotOwner = 5,
    /// Contract holds no balance to withdraw
    NothingToWithdraw = 6,
    /// Amount must be greater than zero
    AmountMustBePositive = 7,
    /// Owner address not set
    OwnerNotSet = 8,
    /// NFT contract address not set
    NftContractNotSet = 9,
    /// Constructor argument is not a contract address
    NftContractRequired = 10,
    /// NFT contract reported a balance no holder can have
    InvalidNftBalance = 11,
}

#[cfg(not(target_arch = "wasm32"))]
pub use deployment::DeploymentFailure;

#[cfg(not(target_arch = "wasm32"))]
mod deployment {
    use std::path::PathBuf;

    use odra::prelude::OdraError;

    /// Any failure of the deploy-and-report run.
    ///
    /// Variants only refine the message; every one of them aborts the run
    /// and maps to the same non-zero exit status.
    #[derive(Debug, thiserror::Error)]
    pub enum DeploymentFailure {
        #[error("could not read constants from {path}: {source}")]
        ConstantsUnreadable {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("malformed constants in {path}: {source}")]
        ConstantsMalformed {
            path: PathBuf,
            #[source]
            source: toml::de::Error,
        },
        #[error("constant {0} is not defined")]
        MissingConstant(&'static str),
        #[error("constant {key} has invalid value {value:?}")]
        InvalidConstant { key: &'static str, value: String },
        #[error("constant {key} is not a valid address: {value:?}")]
        InvalidAddress { key: &'static str, value: String },
        #[error("contract artifact {name} not found at {}", .path.display())]
        ArtifactNotFound { name: &'static str, path: PathBuf },
        #[error("deployment of {name} failed: {error:?}")]
        Deploy { name: &'static str, error: OdraError },
    }
}
