//!
//! The transfer exceeding the sender balance.
//!

use anyhow::Context;

use crate::account::TestAccount;
use crate::cases::Case;
use crate::cases::Verdict;
use crate::config::TestConfig;
use crate::rpc::error::RpcError;
use crate::rpc::RpcClient;
use crate::rpc::Submission;
use crate::transaction::TransactionRequest;

///
/// The transfer exceeding the sender balance.
///
/// Sends the whole coin supply from the test account to itself and expects
/// the node to reject it with the insufficient funds error.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct OutOfBalance;

impl Case for OutOfBalance {
    fn name(&self) -> &'static str {
        "evm_space::out_of_balance"
    }

    async fn run<T>(&self, client: &RpcClient<T>, config: &TestConfig) -> anyhow::Result<Verdict>
    where
        T: web3::Transport,
    {
        let account = TestAccount::from_key(config.test_account_key.as_str())?;
        let nonce = client
            .transaction_count(account.address)
            .await
            .context("Failed to query the test account nonce")?;

        let request = TransactionRequest {
            to: account.address,
            value: config.total_coin.as_u256(),
            gas_price: config.gas_price.as_u256(),
            gas: config.gas.as_u256(),
            nonce,
            chain_id: config.chain_id,
        };
        let signed = request.sign(client.accounts(), &account).await?;
        signed.verify_encoding()?;

        let expected = RpcError::insufficient_funds();
        let verdict = match client.send_raw_transaction(signed.raw.clone()).await? {
            Submission::Rejected(error) if error == expected => Verdict::passed(error),
            Submission::Rejected(error) => Verdict::failed(expected, error, signed.raw),
            Submission::Accepted(hash) => Verdict::failed(
                expected,
                format!("accepted as {hash:?} (signed as {:?})", signed.hash),
                signed.raw,
            ),
        };

        Ok(verdict)
    }
}
