//! Crypto Devs NFT interface
//!
//! The token only needs to enumerate the NFTs a holder owns, so this is the
//! enumerable subset of the collection's entry points. The NFT contract is
//! deployed separately and its address is passed to the token on init.

use odra::casper_types::U256;
use odra::prelude::*;

/// External contract interface for the Crypto Devs NFT collection
#[odra::external_contract]
pub trait CryptoDevs {
    /// Number of NFTs held by `owner`
    fn balance_of(&self, owner: Address) -> U256;

    /// Token id at position `index` of the list of NFTs held by `owner`
    ///
    /// # Arguments
    /// * `owner` - Holder of the NFTs
    /// * `index` - Position in `0..balance_of(owner)`
    fn token_of_owner_by_index(&self, owner: Address, index: U256) -> U256;
}
