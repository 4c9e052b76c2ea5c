//!
//! The conformance cases.
//!

pub mod out_of_balance;

use crate::config::TestConfig;
use crate::rpc::RpcClient;

pub use self::out_of_balance::OutOfBalance;

///
/// The verdict of an executed case.
///
/// Infrastructure failures are not verdicts: they are returned as errors.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The node behaved as expected.
    Passed {
        /// The observed node response.
        observed: String,
    },
    /// The node behaved differently.
    Failed {
        /// The expected node response.
        expected: String,
        /// The actual node response.
        actual: String,
        /// The submitted transaction.
        transaction: web3::types::Bytes,
    },
}

impl Verdict {
    ///
    /// A shortcut constructor.
    ///
    pub fn passed<S>(observed: S) -> Self
    where
        S: ToString,
    {
        Self::Passed {
            observed: observed.to_string(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn failed<E, A>(expected: E, actual: A, transaction: web3::types::Bytes) -> Self
    where
        E: ToString,
        A: ToString,
    {
        Self::Failed {
            expected: expected.to_string(),
            actual: actual.to_string(),
            transaction,
        }
    }
}

///
/// The conformance case.
///
#[allow(async_fn_in_trait)]
pub trait Case {
    ///
    /// The unique case name.
    ///
    fn name(&self) -> &'static str;

    ///
    /// Runs the case against the node behind the client.
    ///
    async fn run<T>(&self, client: &RpcClient<T>, config: &TestConfig) -> anyhow::Result<Verdict>
    where
        T: web3::Transport;
}

///
/// The known conformance cases.
///
#[derive(Debug, Clone)]
pub enum ConformanceCase {
    /// The transfer exceeding the sender balance.
    OutOfBalance(OutOfBalance),
}

impl ConformanceCase {
    ///
    /// Returns all known cases.
    ///
    pub fn all() -> Vec<Self> {
        vec![Self::OutOfBalance(OutOfBalance)]
    }
}

impl Case for ConformanceCase {
    fn name(&self) -> &'static str {
        match self {
            Self::OutOfBalance(case) => case.name(),
        }
    }

    async fn run<T>(&self, client: &RpcClient<T>, config: &TestConfig) -> anyhow::Result<Verdict>
    where
        T: web3::Transport,
    {
        match self {
            Self::OutOfBalance(case) => case.run(client, config).await,
        }
    }
}
