//! Events for the Crypto Devs token

use odra::casper_types::{U256, U512};
use odra::prelude::*;

/// Emitted when tokens are bought with attached CSPR
#[odra::event]
pub struct TokensMinted {
    pub to: Address,
    pub amount: U256,
    pub paid: U512,
}

/// Emitted when an NFT holder claims free tokens
#[odra::event]
pub struct TokensClaimed {
    pub claimer: Address,
    pub nfts_claimed: u64,
    pub amount: U256,
}

/// Emitted when the owner withdraws the sale proceeds
#[odra::event]
pub struct Withdrawn {
    pub to: Address,
    pub amount: U512,
}
