//! Deploy-and-report for the Crypto Dev Token
//!
//! One deployment, one line on the output. The host env decides where the
//! contract lands: `odra_casper_livenet_env::env()` submits a real deploy and
//! blocks until it is processed, `odra_test::env()` runs it in-process.

use std::io::Write;

use odra::host::{Deployer, HostEnv};
use odra::prelude::{Address, Addressable};
use tracing::{error, info};

use crate::artifacts::Artifacts;
use crate::config::{Constants, DeployConfig};
use crate::crypto_dev_token::{CryptoDevToken, CryptoDevTokenHostRef, CryptoDevTokenInitArgs};
use crate::errors::DeploymentFailure;

/// Name the token artifact is built and looked up under
pub const CONTRACT_NAME: &str = "CryptoDevToken";
/// Label printed in front of the deployed address
pub const REPORT_LABEL: &str = "CrytoDev Token Contract Address:";

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// A confirmed token deployment
pub struct DeploymentResult {
    pub contract_address: Address,
    /// Handle to the deployed contract
    pub contract: CryptoDevTokenHostRef,
}

/// Deploys the token with the configured NFT contract as its constructor argument.
///
/// The artifact is resolved before anything is submitted.
pub fn deploy(
    env: &HostEnv,
    config: &DeployConfig,
    artifacts: &Artifacts,
) -> Result<DeploymentResult, DeploymentFailure> {
    artifacts.resolve(CONTRACT_NAME)?;

    info!(
        deployer = %env.caller().to_string(),
        crypto_devs_nft = %config.crypto_devs_nft.to_string(),
        gas = config.gas,
        "deploying {CONTRACT_NAME}"
    );
    env.set_gas(config.gas);

    let init_args = CryptoDevTokenInitArgs {
        crypto_devs_contract: config.crypto_devs_nft,
    };
    let contract = CryptoDevToken::try_deploy(env, init_args).map_err(|error| {
        DeploymentFailure::Deploy {
            name: CONTRACT_NAME,
            error,
        }
    })?;

    let contract_address = contract.address();
    info!(address = %contract_address.to_string(), "{CONTRACT_NAME} deployed");

    Ok(DeploymentResult {
        contract_address,
        contract,
    })
}

pub fn report_line(address: &Address) -> String {
    format!("{REPORT_LABEL} {}", address.to_string())
}

/// Builds the config, deploys, and writes exactly one line to `out`: the
/// report on success, the error otherwise. Returns the process exit status.
pub fn run<W: Write>(env: &HostEnv, constants: &Constants, artifacts: &Artifacts, out: &mut W) -> u8 {
    let outcome = DeployConfig::from_constants(constants)
        .and_then(|config| deploy(env, &config, artifacts));

    let (line, status) = match outcome {
        Ok(result) => (report_line(&result.contract_address), EXIT_SUCCESS),
        Err(failure) => {
            error!(%failure, "deployment failed");
            (failure.to_string(), EXIT_FAILURE)
        }
    };

    if let Err(err) = writeln!(out, "{line}") {
        error!(%err, "failed to write deployment report");
        return EXIT_FAILURE;
    }
    status
}
