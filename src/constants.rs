// Compile-time configuration for the target network
pub const CHAIN_ID: u64 = if cfg!(feature = "mainnet") {
    1
} else if cfg!(feature = "testnet") {
    11155111
} else {
    31337
};

/// Symbol used in URLs for the chain's native currency, e.g. `/add/ETH/0x...`.
pub const NATIVE_SYMBOL: &str = "ETH";

// The devnet is a local fork of mainnet, so it shares the mainnet WETH deployment.
pub const WRAPPED_NATIVE: &str = if cfg!(feature = "testnet") && !cfg!(feature = "mainnet") {
    "0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14"
} else {
    "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
};

pub const APP_NAME: &str = "Horswap";
