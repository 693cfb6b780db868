use ed25519_dalek::SigningKey;
use sha2::{Digest, Sha256};
use soroban_sdk::{
    xdr::{AccountId, PublicKey, ScAddress, Uint256},
    Address, Env, TryFromVal,
};

use crate::error::ProviderError;

const WALLET_DOMAIN: &[u8] = b"vanilla-provider-wallet-v1";

/// A deterministic test account.
#[derive(Clone, Debug)]
pub struct Wallet {
    pub index: u32,
    pub address: Address,
    pub public_key: [u8; 32],
}

/// Collapses whitespace and case so equivalent phrases derive the same keys.
pub fn normalize_mnemonic(mnemonic: &str) -> String {
    mnemonic
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derives the ed25519 key of wallet `index`:
/// `SHA-256(SHA-256(domain) || normalized_mnemonic || index_be)`.
pub fn derive_signing_key(mnemonic: &str, index: u32) -> SigningKey {
    let salt = Sha256::digest(WALLET_DOMAIN);
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(normalize_mnemonic(mnemonic).as_bytes());
    hasher.update(index.to_be_bytes());
    let secret: [u8; 32] = hasher.finalize().into();
    SigningKey::from_bytes(&secret)
}

/// Builds the Stellar account address (`G...`) owning `public_key` in `env`.
pub fn account_address(env: &Env, public_key: [u8; 32]) -> Result<Address, ProviderError> {
    let account = ScAddress::Account(AccountId(PublicKey::PublicKeyTypeEd25519(Uint256(
        public_key,
    ))));
    Address::try_from_val(env, &account).map_err(|_| ProviderError::InvalidAddress)
}

pub fn derive_wallet(env: &Env, mnemonic: &str, index: u32) -> Result<Wallet, ProviderError> {
    let public_key = derive_signing_key(mnemonic, index).verifying_key().to_bytes();
    let address = account_address(env, public_key)?;
    Ok(Wallet { index, address, public_key })
}
