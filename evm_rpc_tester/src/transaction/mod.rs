//!
//! The conformance transaction.
//!

pub mod signed;

use anyhow::Context;

use crate::account::TestAccount;

use self::signed::SignedTransaction;

///
/// The unsigned legacy transaction request.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    /// The recipient address.
    pub to: web3::types::Address,
    /// The transferred value in the chain-native unit.
    pub value: web3::types::U256,
    /// The gas price.
    pub gas_price: web3::types::U256,
    /// The gas limit.
    pub gas: web3::types::U256,
    /// The sender nonce.
    pub nonce: web3::types::U256,
    /// The chain ID.
    pub chain_id: u64,
}

impl TransactionRequest {
    ///
    /// Signs the request locally with the account key.
    ///
    /// Every field the signer could otherwise query from the node is set,
    /// so the transport is never used.
    ///
    pub async fn sign<T>(
        &self,
        accounts: web3::api::Accounts<T>,
        account: &TestAccount,
    ) -> anyhow::Result<SignedTransaction>
    where
        T: web3::Transport,
    {
        let signed = accounts
            .sign_transaction(self.to_parameters(), account.key())
            .await
            .context("Failed to sign the transaction")?;

        Ok(SignedTransaction::new(
            signed.raw_transaction,
            signed.transaction_hash,
            self.nonce,
            self.chain_id,
        ))
    }

    ///
    /// Converts the request into the signer parameters.
    ///
    fn to_parameters(&self) -> web3::types::TransactionParameters {
        web3::types::TransactionParameters {
            nonce: Some(self.nonce),
            to: Some(self.to),
            gas: self.gas,
            gas_price: Some(self.gas_price),
            value: self.value,
            chain_id: Some(self.chain_id),
            ..Default::default()
        }
    }
}
