//! Crypto Devs - ICO token for the Crypto Devs NFT collection on Casper Network
//!
//! This crate provides:
//! - `CryptoDevToken`, a CEP-18 token sold for CSPR and claimable by NFT holders
//! - the host-side script that deploys it against an existing NFT contract

#![cfg_attr(target_arch = "wasm32", no_std)]

extern crate alloc;

pub mod crypto_dev_token;
pub mod crypto_devs_interface;
pub mod errors;
pub mod events;

#[cfg(not(target_arch = "wasm32"))]
pub mod artifacts;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod deployer;

// Re-export main types for external use
pub use crypto_dev_token::CryptoDevToken;
pub use errors::*;
pub use events::*;

// Re-export generated types only when not building for wasm32 target
#[cfg(not(target_arch = "wasm32"))]
pub use crypto_dev_token::{CryptoDevTokenHostRef, CryptoDevTokenInitArgs};
#[cfg(not(target_arch = "wasm32"))]
pub use deployer::{deploy, run, DeploymentResult};
