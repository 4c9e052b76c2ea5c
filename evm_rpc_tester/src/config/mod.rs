//!
//! The conformance test configuration.
//!

pub mod quantity;

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use self::quantity::Quantity;

///
/// The conformance test configuration.
///
/// Passed explicitly into every case, so that cases never depend on
/// process-wide fixtures.
///
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestConfig {
    /// The total native coin supply of the network under test.
    pub total_coin: Quantity,
    /// The well-known test account private key, hex-encoded.
    pub test_account_key: String,
    /// The chain ID of the network under test.
    pub chain_id: u64,
    /// The legacy gas price.
    pub gas_price: Quantity,
    /// The gas limit.
    pub gas: Quantity,
    /// The bound on a single RPC round trip, in seconds.
    pub rpc_timeout_secs: u64,
}

impl TestConfig {
    /// The total coin supply in whole coins.
    pub const TOTAL_COIN_UNITS: u64 = 5_000_000_000;

    /// The number of decimals of the native coin.
    pub const COIN_DECIMALS: usize = 18;

    /// The default test account private key.
    pub const DEFAULT_TEST_ACCOUNT_KEY: &'static str =
        "46b9e861b63d3509c88b7817275a30d22d62c8cd8fa6486ddee35ef0d8e0495f";

    /// The default chain ID.
    pub const DEFAULT_CHAIN_ID: u64 = 10;

    /// The default gas price.
    pub const DEFAULT_GAS_PRICE: u64 = 2;

    /// The default gas limit.
    pub const DEFAULT_GAS: u64 = 210_000;

    /// The default RPC timeout in seconds.
    pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 30;

    ///
    /// Reads the configuration from a YAML file.
    ///
    /// Fields missing from the file keep their default values.
    ///
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read the config file `{}`", path.display()))?;
        Self::from_yaml(data.as_str())
            .with_context(|| format!("Failed to parse the config file `{}`", path.display()))
    }

    ///
    /// Parses the configuration from a YAML string.
    ///
    pub fn from_yaml(data: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(data)?;
        if config.rpc_timeout_secs == 0 {
            anyhow::bail!("The RPC timeout must be positive");
        }
        Ok(config)
    }

    ///
    /// The RPC timeout as a duration.
    ///
    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc_timeout_secs)
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        let total_coin = web3::types::U256::from(Self::TOTAL_COIN_UNITS)
            * web3::types::U256::exp10(Self::COIN_DECIMALS);

        Self {
            total_coin: Quantity(total_coin),
            test_account_key: Self::DEFAULT_TEST_ACCOUNT_KEY.to_owned(),
            chain_id: Self::DEFAULT_CHAIN_ID,
            gas_price: Quantity::from(Self::DEFAULT_GAS_PRICE),
            gas: Quantity::from(Self::DEFAULT_GAS),
            rpc_timeout_secs: Self::DEFAULT_RPC_TIMEOUT_SECS,
        }
    }
}
