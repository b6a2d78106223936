//! Mock Crypto Devs NFT contract for testing
//!
//! Keeps a list of token ids per owner and answers the enumerable queries
//! the token relies on.

use odra::casper_types::U256;
use odra::prelude::*;

/// Mock Crypto Devs NFT contract for testing
#[odra::module]
pub struct MockCryptoDevs {
    owned: Mapping<Address, Vec<U256>>,
    next_token_id: Var<U256>,
    reported_balance: Mapping<Address, U256>,
}

#[odra::module]
impl MockCryptoDevs {
    pub fn init(&mut self) {
        self.next_token_id.set(U256::zero());
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        if let Some(balance) = self.reported_balance.get(&owner) {
            return balance;
        }
        U256::from(self.owned.get_or_default(&owner).len() as u64)
    }

    pub fn token_of_owner_by_index(&self, owner: Address, index: U256) -> U256 {
        self.owned.get_or_default(&owner)[index.as_usize()]
    }

    // Test helper to mint the next token id to `owner`
    pub fn mint_to(&mut self, owner: Address) -> U256 {
        let token_id = self.next_token_id.get_or_default();
        let mut tokens = self.owned.get_or_default(&owner);
        tokens.push(token_id);
        self.owned.set(&owner, tokens);
        self.next_token_id.set(token_id + U256::one());
        token_id
    }

    // Test helper to move a token between owners
    pub fn move_token(&mut self, from: Address, to: Address, token_id: U256) {
        let mut from_tokens = self.owned.get_or_default(&from);
        from_tokens.retain(|id| *id != token_id);
        self.owned.set(&from, from_tokens);

        let mut to_tokens = self.owned.get_or_default(&to);
        to_tokens.push(token_id);
        self.owned.set(&to, to_tokens);
    }

    // Test helper to make `balance_of` lie about `owner`
    pub fn report_balance(&mut self, owner: Address, balance: U256) {
        self.reported_balance.set(&owner, balance);
    }
}
