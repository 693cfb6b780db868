use core::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::ProviderError;

/// Seed phrase every default provider derives its wallets from.
pub const DEFAULT_MNEMONIC: &str = "horn horn horn horn horn horn horn horn horn horn horn horn";
/// CPU instruction ceiling applied to the host budget.
pub const DEFAULT_GAS_LIMIT: u64 = 9_999_999;
/// Memory ceiling applied to the host budget (40 MiB).
pub const DEFAULT_MEMORY_LIMIT: u64 = 40 * 1024 * 1024;
pub const DEFAULT_WALLET_COUNT: u32 = 10;

const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Named protocol baseline pinned on the test ledger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum Hardfork {
    Soroban20,
    #[default]
    Soroban21,
}

impl Hardfork {
    pub const fn protocol_version(self) -> u32 {
        match self {
            Hardfork::Soroban20 => 20,
            Hardfork::Soroban21 => 21,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Hardfork::Soroban20 => "soroban-20",
            Hardfork::Soroban21 => "soroban-21",
        }
    }
}

impl fmt::Display for Hardfork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Hardfork {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "soroban-20" => Ok(Hardfork::Soroban20),
            // Name the EVM harness used for its baseline.
            "soroban-21" | "istanbul" => Ok(Hardfork::Soroban21),
            other => Err(ProviderError::UnknownHardfork(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Hardfork {
    type Error = ProviderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options the provider is built from. Every field has a default, so a
/// TOML document only needs the keys it wants to override.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    pub mnemonic: String,
    pub gas_limit: u64,
    pub memory_limit: u64,
    pub hardfork: Hardfork,
    pub wallet_count: u32,
    pub mock_all_auths: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            mnemonic: DEFAULT_MNEMONIC.to_owned(),
            gas_limit: DEFAULT_GAS_LIMIT,
            memory_limit: DEFAULT_MEMORY_LIMIT,
            hardfork: Hardfork::default(),
            wallet_count: DEFAULT_WALLET_COUNT,
            mock_all_auths: true,
        }
    }
}

impl ProviderConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ProviderError> {
        let config: ProviderConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ProviderError> {
        let words = self.mnemonic.split_whitespace().count();
        if words == 0 {
            return Err(ProviderError::EmptyMnemonic);
        }
        if !VALID_WORD_COUNTS.contains(&words) {
            return Err(ProviderError::InvalidWordCount(words));
        }
        if self.gas_limit == 0 {
            return Err(ProviderError::ZeroGasLimit);
        }
        if self.memory_limit == 0 {
            return Err(ProviderError::ZeroMemoryLimit);
        }
        Ok(())
    }
}
