//!
//! The EVM RPC conformance tester library.
//!

pub(crate) mod account;
pub(crate) mod cases;
pub(crate) mod config;
pub(crate) mod filters;
pub(crate) mod rpc;
pub(crate) mod summary;
pub(crate) mod transaction;

use std::sync::Arc;
use std::sync::Mutex;

use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

pub use crate::account::TestAccount;
pub use crate::cases::Case;
pub use crate::cases::ConformanceCase;
pub use crate::cases::OutOfBalance;
pub use crate::cases::Verdict;
pub use crate::config::quantity::Quantity;
pub use crate::config::TestConfig;
pub use crate::filters::Filters;
pub use crate::rpc::error::RpcError;
pub use crate::rpc::RpcClient;
pub use crate::rpc::Submission;
pub use crate::summary::Summary;
pub use crate::transaction::signed::SignedTransaction;
pub use crate::transaction::TransactionRequest;

///
/// The EVM RPC conformance tester.
///
pub struct RpcTester {
    /// The summary.
    pub summary: Arc<Mutex<Summary>>,
    /// The filters.
    pub filters: Filters,
    /// The configuration shared by all cases.
    pub config: TestConfig,
}

impl RpcTester {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        summary: Arc<Mutex<Summary>>,
        filters: Filters,
        config: TestConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            summary,
            filters,
            config,
        })
    }

    ///
    /// Runs all selected cases against the node at the URL.
    ///
    /// Every case opens its own HTTP connection.
    ///
    pub fn run(self, url: &str) -> anyhow::Result<()> {
        let cases = self.selected_cases();

        let _: Vec<()> = cases
            .into_par_iter()
            .map(|case| {
                let result = Self::block_on(async {
                    let client = RpcClient::http(url, self.config.rpc_timeout())?;
                    case.run(&client, &self.config).await
                });
                self.record(case.name(), result);
            })
            .collect();

        Ok(())
    }

    ///
    /// Runs all selected cases over clones of the transport.
    ///
    pub fn run_with_transport<T>(self, transport: T) -> anyhow::Result<()>
    where
        T: web3::Transport + Send + Sync,
    {
        let cases = self.selected_cases();

        let _: Vec<()> = cases
            .into_par_iter()
            .map(|case| {
                let result = Self::block_on(async {
                    let client = RpcClient::new(transport.clone(), self.config.rpc_timeout());
                    case.run(&client, &self.config).await
                });
                self.record(case.name(), result);
            })
            .collect();

        Ok(())
    }

    ///
    /// Returns the cases passing the filters, marking the others as ignored.
    ///
    fn selected_cases(&self) -> Vec<ConformanceCase> {
        ConformanceCase::all()
            .into_iter()
            .filter(|case| {
                let is_selected = self.filters.check_case_name(case.name());
                if !is_selected {
                    Summary::ignored(self.summary.clone(), case.name().to_owned());
                }
                is_selected
            })
            .collect()
    }

    ///
    /// Drives a case to completion on a dedicated single-threaded runtime.
    ///
    fn block_on<F>(future: F) -> anyhow::Result<Verdict>
    where
        F: std::future::Future<Output = anyhow::Result<Verdict>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| anyhow::anyhow!("Failed to start the async runtime: {error}"))?;
        runtime.block_on(future)
    }

    ///
    /// Records the case result in the summary.
    ///
    fn record(&self, name: &str, result: anyhow::Result<Verdict>) {
        match result {
            Ok(Verdict::Passed { observed }) => {
                Summary::passed(self.summary.clone(), name.to_owned(), observed)
            }
            Ok(Verdict::Failed {
                expected,
                actual,
                transaction,
            }) => Summary::failed(
                self.summary.clone(),
                name.to_owned(),
                expected,
                actual,
                transaction.0.as_slice(),
            ),
            Err(error) => Summary::invalid(self.summary.clone(), name.to_owned(), &error),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::rpc::mock::MockTransport;
    use crate::Filters;
    use crate::RpcTester;
    use crate::Summary;
    use crate::TestConfig;

    fn tester(filters: Vec<String>) -> RpcTester {
        RpcTester::new(
            Summary::new(false, true).wrap(),
            Filters::new(filters),
            TestConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn rejecting_node_passes() {
        let transport = MockTransport::default();
        transport.push_value(serde_json::json!("0x0"));
        transport.push_rpc_error(-32003, "insufficient funds for transfer");

        let tester = tester(vec![]);
        let summary = tester.summary.clone();
        tester.run_with_transport(transport).unwrap();

        let summary = Summary::unwrap_arc(summary).unwrap();
        assert!(summary.is_successful());
        assert_eq!(summary.passed_count(), 1);
    }

    #[test]
    fn accepting_node_fails() {
        let transport = MockTransport::default();
        transport.push_value(serde_json::json!("0x0"));
        transport.push_value(serde_json::to_value(web3::types::H256::zero()).unwrap());

        let tester = tester(vec![]);
        let summary = tester.summary.clone();
        tester.run_with_transport(transport).unwrap();

        let summary = Summary::unwrap_arc(summary).unwrap();
        assert!(!summary.is_successful());
        assert_eq!(summary.failed_count(), 1);
    }

    #[test]
    fn unreachable_node_is_invalid() {
        let tester = tester(vec![]);
        let summary = tester.summary.clone();
        tester.run_with_transport(MockTransport::default()).unwrap();

        let summary = Summary::unwrap_arc(summary).unwrap();
        assert!(!summary.is_successful());
        assert_eq!(summary.invalid_count(), 1);
    }

    #[test]
    fn filtered_out_cases_are_ignored() {
        let transport = MockTransport::default();

        let tester = tester(vec!["nonexistent".to_owned()]);
        let summary = tester.summary.clone();
        tester.run_with_transport(transport.clone()).unwrap();

        let summary = Summary::unwrap_arc(summary).unwrap();
        assert!(summary.is_successful());
        assert_eq!(summary.ignored_count(), 1);
        assert!(transport.requests().is_empty());
    }
}
