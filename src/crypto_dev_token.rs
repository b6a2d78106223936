//! Crypto Dev Token - CEP-18 token sold for CSPR and claimable by NFT holders
//!
//! Every Crypto Devs NFT entitles its holder to `TOKENS_PER_NFT` free tokens,
//! claimable once per NFT. Anyone can also buy tokens at `TOKEN_PRICE` each.

use odra::casper_types::{U256, U512};
use odra::prelude::*;
use odra::ContractRef;
use odra_modules::cep18_token::Cep18;

use crate::crypto_devs_interface::CryptoDevsContractRef;
use crate::errors::Error;
use crate::events::{TokensClaimed, TokensMinted, Withdrawn};

/// Token decimals, one whole token is 10^18 base units
pub const DECIMALS: u8 = 18;
/// Base units in one whole token
pub const ONE_TOKEN: u128 = 1_000_000_000_000_000_000;
/// Price of one whole token in motes (0.001 CSPR)
pub const TOKEN_PRICE: u64 = 1_000_000;
/// Whole tokens granted per claimed NFT
pub const TOKENS_PER_NFT: u64 = 10;
/// Hard cap on the supply, in whole tokens
pub const MAX_TOTAL_SUPPLY: u64 = 10_000;

/// Crypto Dev Token
#[odra::module]
pub struct CryptoDevToken {
    /// CEP-18 token implementation
    cep18: SubModule<Cep18>,
    /// Crypto Devs NFT collection granting free claims
    crypto_devs_contract: Var<Address>,
    /// NFT token ids whose claim has been used
    token_ids_claimed: Mapping<U256, bool>,
    /// Deployer, receives the sale proceeds
    owner: Var<Address>,
}

#[odra::module]
impl CryptoDevToken {
    /// Initialize the token
    ///
    /// # Arguments
    /// * `crypto_devs_contract` - Address of the deployed Crypto Devs NFT contract
    pub fn init(&mut self, crypto_devs_contract: Address) {
        if !crypto_devs_contract.is_contract() {
            self.env().revert(Error::NftContractRequired);
        }
        self.cep18.init(
            "CD".to_string(),
            "Crypto Dev Token".to_string(),
            DECIMALS,
            U256::zero(),
        );
        self.crypto_devs_contract.set(crypto_devs_contract);
        self.owner.set(self.env().caller());
    }

    /// Buy `amount` whole tokens, paying `TOKEN_PRICE` motes for each
    #[odra(payable)]
    pub fn mint(&mut self, amount: U256) {
        if amount.is_zero() {
            self.env().revert(Error::AmountMustBePositive);
        }
        // Bounds the conversions below
        if amount > U256::from(MAX_TOTAL_SUPPLY) {
            self.env().revert(Error::ExceedsMaxSupply);
        }
        let paid = self.env().attached_value();
        let required = U512::from(TOKEN_PRICE) * U512::from(amount.as_u128());
        if paid < required {
            self.env().revert(Error::InsufficientPayment);
        }

        let caller = self.env().caller();
        let minted = amount * U256::from(ONE_TOKEN);
        self.mint_capped(caller, minted);

        self.env().emit_event(TokensMinted {
            to: caller,
            amount: minted,
            paid,
        });
    }

    /// Claim `TOKENS_PER_NFT` tokens for every held NFT not claimed yet
    pub fn claim(&mut self) -> U256 {
        let caller = self.env().caller();
        let nft = CryptoDevsContractRef::new(self.env(), self.nft_address());

        let balance = nft.balance_of(caller);
        if balance.is_zero() {
            self.env().revert(Error::NoNftsOwned);
        }
        if balance > U256::from(u64::MAX) {
            self.env().revert(Error::InvalidNftBalance);
        }

        let mut newly_claimed = 0u64;
        for index in 0..balance.as_u64() {
            let token_id = nft.token_of_owner_by_index(caller, U256::from(index));
            if !self.token_ids_claimed.get_or_default(&token_id) {
                self.token_ids_claimed.set(&token_id, true);
                newly_claimed += 1;
            }
        }
        if newly_claimed == 0 {
            self.env().revert(Error::AllTokensClaimed);
        }

        let amount = U256::from(newly_claimed) * U256::from(TOKENS_PER_NFT) * U256::from(ONE_TOKEN);
        self.mint_capped(caller, amount);

        self.env().emit_event(TokensClaimed {
            claimer: caller,
            nfts_claimed: newly_claimed,
            amount,
        });
        amount
    }

    /// Send the whole contract balance to the owner
    pub fn withdraw(&mut self) {
        let owner = self.require_owner();
        let amount = self.env().self_balance();
        if amount.is_zero() {
            self.env().revert(Error::NothingToWithdraw);
        }
        self.env().transfer_tokens(&owner, &amount);
        self.env().emit_event(Withdrawn { to: owner, amount });
    }

    pub fn transfer(&mut self, to: Address, amount: U256) {
        self.cep18.transfer(&to, &amount);
    }

    pub fn approve(&mut self, spender: Address, amount: U256) {
        self.cep18.approve(&spender, &amount);
    }

    pub fn transfer_from(&mut self, owner: Address, to: Address, amount: U256) {
        self.cep18.transfer_from(&owner, &to, &amount);
    }

    pub fn balance_of(&self, owner: Address) -> U256 {
        self.cep18.balance_of(&owner)
    }

    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.cep18.allowance(&owner, &spender)
    }

    pub fn total_supply(&self) -> U256 {
        self.cep18.total_supply()
    }

    pub fn name(&self) -> String {
        self.cep18.name()
    }

    pub fn symbol(&self) -> String {
        self.cep18.symbol()
    }

    pub fn decimals(&self) -> u8 {
        self.cep18.decimals()
    }

    /// Address of the NFT collection passed on init
    pub fn crypto_devs_contract(&self) -> Option<Address> {
        self.crypto_devs_contract.get()
    }

    pub fn owner(&self) -> Option<Address> {
        self.owner.get()
    }

    /// Whether the free tokens of NFT `token_id` have been claimed
    pub fn is_token_id_claimed(&self, token_id: U256) -> bool {
        self.token_ids_claimed.get_or_default(&token_id)
    }

    // Internal functions

    fn mint_capped(&mut self, to: Address, amount: U256) {
        let max = U256::from(MAX_TOTAL_SUPPLY) * U256::from(ONE_TOKEN);
        if self.cep18.total_supply() + amount > max {
            self.env().revert(Error::ExceedsMaxSupply);
        }
        self.cep18.raw_mint(&to, &amount);
    }

    fn nft_address(&self) -> Address {
        self.crypto_devs_contract
            .get()
            .unwrap_or_revert_with(&self.env(), Error::NftContractNotSet)
    }

    fn require_owner(&self) -> Address {
        let owner = self.owner.get().unwrap_or_revert_with(&self.env(), Error::OwnerNotSet);
        if self.env().caller() != owner {
            self.env().revert(Error::NotOwner);
        }
        owner
    }
}
