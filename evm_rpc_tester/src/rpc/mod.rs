//!
//! The JSON-RPC client of the node under test.
//!

pub mod error;
#[cfg(test)]
pub mod mock;

use std::time::Duration;

use anyhow::Context;

use self::error::RpcError;

///
/// The outcome of a raw transaction submission.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The node accepted the transaction and returned its hash.
    Accepted(web3::types::H256),
    /// The node rejected the transaction with a JSON-RPC error.
    Rejected(RpcError),
}

///
/// The JSON-RPC client of the node under test.
///
/// Every call is bounded by the timeout. Calls are never retried.
///
#[derive(Debug, Clone)]
pub struct RpcClient<T>
where
    T: web3::Transport,
{
    /// The web3 instance.
    web3: web3::Web3<T>,
    /// The bound on a single round trip.
    timeout: Duration,
}

impl RpcClient<web3::transports::Http> {
    ///
    /// Creates a client with a dedicated HTTP connection.
    ///
    pub fn http(url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let transport = web3::transports::Http::new(url)
            .with_context(|| format!("Failed to create the HTTP transport for `{url}`"))?;
        Ok(Self::new(transport, timeout))
    }
}

impl<T> RpcClient<T>
where
    T: web3::Transport,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(transport: T, timeout: Duration) -> Self {
        Self {
            web3: web3::Web3::new(transport),
            timeout,
        }
    }

    ///
    /// Returns the accounts namespace used for local signing.
    ///
    pub fn accounts(&self) -> web3::api::Accounts<T> {
        self.web3.accounts()
    }

    ///
    /// Queries the account nonce with `eth_getTransactionCount` at the latest block.
    ///
    pub async fn transaction_count(
        &self,
        address: web3::types::Address,
    ) -> anyhow::Result<web3::types::U256> {
        log::debug!("eth_getTransactionCount {address:?}");

        let nonce = tokio::time::timeout(
            self.timeout,
            self.web3.eth().transaction_count(address, None),
        )
        .await
        .map_err(|_| self.timed_out("eth_getTransactionCount"))?
        .context("`eth_getTransactionCount` failed")?;

        log::debug!("eth_getTransactionCount {address:?} -> {nonce}");
        Ok(nonce)
    }

    ///
    /// Submits a signed transaction with `eth_sendRawTransaction`.
    ///
    /// A JSON-RPC error response is returned as [`Submission::Rejected`].
    /// Transport failures and timeouts are returned as errors.
    ///
    pub async fn send_raw_transaction(
        &self,
        raw: web3::types::Bytes,
    ) -> anyhow::Result<Submission> {
        log::debug!("eth_sendRawTransaction 0x{}", hex::encode(raw.0.as_slice()));

        let result = tokio::time::timeout(
            self.timeout,
            self.web3.eth().send_raw_transaction(raw),
        )
        .await
        .map_err(|_| self.timed_out("eth_sendRawTransaction"))?;

        let submission = match result {
            Ok(hash) => Submission::Accepted(hash),
            Err(web3::Error::Rpc(error)) => Submission::Rejected(RpcError::from(error)),
            Err(error) => {
                return Err(anyhow::Error::new(error).context("`eth_sendRawTransaction` failed"))
            }
        };

        log::debug!("eth_sendRawTransaction -> {submission:?}");
        Ok(submission)
    }

    ///
    /// The timeout error of the specified method.
    ///
    fn timed_out(&self, method: &str) -> anyhow::Error {
        anyhow::anyhow!(
            "`{method}` timed out after {} ms",
            self.timeout.as_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::mock::MockTransport;
    use super::RpcClient;
    use super::Submission;
    use crate::rpc::error::RpcError;

    const TIMEOUT: Duration = Duration::from_millis(200);

    #[tokio::test]
    async fn transaction_count_queries_the_latest_block() {
        let transport = MockTransport::default();
        transport.push_value(serde_json::json!("0x2a"));
        let client = RpcClient::new(transport.clone(), TIMEOUT);

        let nonce = client
            .transaction_count(web3::types::Address::repeat_byte(0x11))
            .await
            .unwrap();

        assert_eq!(nonce, web3::types::U256::from(42u64));
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "eth_getTransactionCount");
        assert_eq!(requests[0].1[1], serde_json::json!("latest"));
    }

    #[tokio::test]
    async fn rpc_errors_are_rejections() {
        let transport = MockTransport::default();
        transport.push_rpc_error(-32003, "insufficient funds for transfer");
        let client = RpcClient::new(transport, TIMEOUT);

        let submission = client
            .send_raw_transaction(web3::types::Bytes(vec![0xc0]))
            .await
            .unwrap();

        assert_eq!(submission, Submission::Rejected(RpcError::insufficient_funds()));
    }

    #[tokio::test]
    async fn accepted_transactions_return_the_hash() {
        let transport = MockTransport::default();
        let hash = web3::types::H256::repeat_byte(0xab);
        transport.push_value(serde_json::to_value(hash).unwrap());
        let client = RpcClient::new(transport, TIMEOUT);

        let submission = client
            .send_raw_transaction(web3::types::Bytes(vec![0xc0]))
            .await
            .unwrap();

        assert_eq!(submission, Submission::Accepted(hash));
    }

    #[tokio::test]
    async fn transport_failures_are_errors() {
        let transport = MockTransport::default();
        transport.push_error(web3::Error::Transport(
            web3::error::TransportError::Message("connection refused".to_owned()),
        ));
        let client = RpcClient::new(transport, TIMEOUT);

        assert!(client
            .send_raw_transaction(web3::types::Bytes(vec![0xc0]))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn hanging_calls_time_out() {
        let transport = MockTransport::default();
        transport.push_hang();
        let client = RpcClient::new(transport, Duration::from_millis(20));

        let error = client
            .transaction_count(web3::types::Address::zero())
            .await
            .unwrap_err();

        assert!(error.to_string().contains("timed out"));
    }
}
