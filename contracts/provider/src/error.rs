use thiserror::Error;

/// Configuration-time failures. Nothing past construction can fail.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("mnemonic is empty")]
    EmptyMnemonic,
    #[error("mnemonic has {0} words, expected 12, 15, 18, 21 or 24")]
    InvalidWordCount(usize),
    #[error("gas limit must be greater than zero")]
    ZeroGasLimit,
    #[error("memory limit must be greater than zero")]
    ZeroMemoryLimit,
    #[error("unknown hardfork `{0}`")]
    UnknownHardfork(String),
    #[error("wallet index {index} out of range, provider has {count} wallets")]
    WalletOutOfRange { index: u32, count: u32 },
    #[error("invalid provider config: {0}")]
    InvalidConfig(#[from] toml::de::Error),
    #[error("public key could not be converted into an account address")]
    InvalidAddress,
}
