//!
//! The test account.
//!

use web3::signing::Key;
use web3::signing::SecretKey;
use web3::signing::SecretKeyRef;

///
/// The test account.
///
/// Derived from a well-known private key and used both as the sender and the
/// recipient of conformance transactions.
///
#[derive(Debug, Clone)]
pub struct TestAccount {
    /// The account address.
    pub address: web3::types::Address,
    /// The account private key.
    secret_key: SecretKey,
}

impl TestAccount {
    ///
    /// Derives the account from a hex-encoded private key, with or without the `0x` prefix.
    ///
    pub fn from_key(key: &str) -> anyhow::Result<Self> {
        let key = key.trim();
        let bytes = hex::decode(key.strip_prefix("0x").unwrap_or(key))
            .map_err(|error| anyhow::anyhow!("The test account key is not valid hex: {error}"))?;
        let secret_key = SecretKey::from_slice(bytes.as_slice())
            .map_err(|error| anyhow::anyhow!("The test account key is invalid: {error}"))?;
        let address = SecretKeyRef::new(&secret_key).address();

        Ok(Self {
            address,
            secret_key,
        })
    }

    ///
    /// Returns the signing key reference.
    ///
    pub fn key(&self) -> SecretKeyRef<'_> {
        SecretKeyRef::new(&self.secret_key)
    }
}
