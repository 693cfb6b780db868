//! Deterministic execution context for contract tests.
//!
//! A [`Provider`] owns one in-process Soroban host ([`Env`]) whose ledger,
//! budget and accounts are fixed by a [`ProviderConfig`], so every run of a
//! suite sees the same protocol version, the same resource ceilings and the
//! same wallet addresses.

mod config;
mod error;
mod wallet;

#[cfg(test)]
mod test;

use log::debug;
use sha2::{Digest, Sha256};
use soroban_sdk::{
    testutils::{ContractFunctionSet, Events as _, Ledger as _, LedgerInfo},
    Address, Env, Val, Vec,
};

pub use config::{
    Hardfork, ProviderConfig, DEFAULT_GAS_LIMIT, DEFAULT_MEMORY_LIMIT, DEFAULT_MNEMONIC,
    DEFAULT_WALLET_COUNT,
};
pub use error::ProviderError;
pub use wallet::{derive_signing_key, normalize_mnemonic, Wallet};

/// Ledger sequence every provider starts at.
pub const GENESIS_SEQUENCE: u32 = 100;
/// Ledger close time every provider starts at (2021-01-01T00:00:00Z).
pub const GENESIS_TIMESTAMP: u64 = 1_609_459_200;

const NETWORK_PASSPHRASE: &[u8] = b"vanilla test network";
const BASE_RESERVE: u32 = 10;
const MIN_TEMP_ENTRY_TTL: u32 = 16;
const MIN_PERSISTENT_ENTRY_TTL: u32 = 4096;
const MAX_ENTRY_TTL: u32 = 6_312_000; // ~1 year in 5s ledgers

/// An event as recorded by the host: `(contract, topics, data)`.
pub type ContractEvent = (Address, Vec<Val>, Val);

#[derive(Clone)]
pub struct Provider {
    env: Env,
    config: ProviderConfig,
}

impl Provider {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        config.validate()?;

        let env = Env::default();
        env.ledger().set(LedgerInfo {
            protocol_version: config.hardfork.protocol_version(),
            sequence_number: GENESIS_SEQUENCE,
            timestamp: GENESIS_TIMESTAMP,
            network_id: Sha256::digest(NETWORK_PASSPHRASE).into(),
            base_reserve: BASE_RESERVE,
            min_temp_entry_ttl: MIN_TEMP_ENTRY_TTL,
            min_persistent_entry_ttl: MIN_PERSISTENT_ENTRY_TTL,
            max_entry_ttl: MAX_ENTRY_TTL,
        });
        if config.mock_all_auths {
            env.mock_all_auths();
        }

        debug!(
            "provider ready: hardfork={} gas_limit={} memory_limit={} wallets={}",
            config.hardfork, config.gas_limit, config.memory_limit, config.wallet_count
        );
        let provider = Self { env, config };
        provider.reset_budget();
        Ok(provider)
    }

    /// The shared context with the default configuration.
    pub fn default_provider() -> Result<Self, ProviderError> {
        Self::new(ProviderConfig::default())
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Gives the next invocation a full budget: `gas_limit` CPU instructions
    /// and `memory_limit` bytes.
    ///
    /// The host budget is shared by every call made through one `Env`, while
    /// the ceilings are meant per transaction, so callers reset it before
    /// each invocation.
    pub fn reset_budget(&self) {
        self.env.budget().reset_limits(self.config.gas_limit, self.config.memory_limit);
    }

    /// Runs `invoke` against a freshly reset budget.
    pub fn metered<T>(&self, invoke: impl FnOnce() -> T) -> T {
        self.reset_budget();
        invoke()
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// All configured wallets, in index order.
    pub fn get_wallets(&self) -> Result<std::vec::Vec<Wallet>, ProviderError> {
        (0..self.config.wallet_count).map(|index| self.wallet(index)).collect()
    }

    pub fn wallet(&self, index: u32) -> Result<Wallet, ProviderError> {
        if index >= self.config.wallet_count {
            return Err(ProviderError::WalletOutOfRange {
                index,
                count: self.config.wallet_count,
            });
        }
        let wallet = wallet::derive_wallet(&self.env, &self.config.mnemonic, index)?;
        debug!("derived wallet {index}");
        Ok(wallet)
    }

    /// Registers a fresh instance of `contract` and returns its address.
    pub fn deploy<C: ContractFunctionSet + 'static>(&self, contract: C) -> Address {
        let address = self.env.register_contract(None, contract);
        debug!("deployed contract instance");
        address
    }

    /// Most recent contract event published in this environment.
    pub fn last_event(&self) -> Option<ContractEvent> {
        self.env.events().all().last()
    }
}
