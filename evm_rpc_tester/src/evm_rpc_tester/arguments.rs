//!
//! The EVM RPC conformance tester arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

///
/// The EVM RPC conformance tester arguments.
///
#[derive(Debug, StructOpt)]
#[structopt(
    name = "evm-rpc-tester",
    about = "Ethereum JSON-RPC Node Conformance Testing Framework"
)]
pub struct Arguments {
    /// Prints the passed cases as well.
    #[structopt(short = "v", long = "verbose")]
    pub verbosity: bool,

    /// Suppresses the output completely.
    #[structopt(short = "q", long = "quiet")]
    pub quiet: bool,

    /// The JSON-RPC endpoint of the node under test.
    #[structopt(long = "url", default_value = "http://127.0.0.1:8545")]
    pub url: String,

    /// The YAML configuration file. Missing fields keep their defaults.
    #[structopt(long = "config", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Overrides the RPC timeout from the configuration, in seconds.
    #[structopt(long = "timeout")]
    pub timeout: Option<u64>,

    /// Runs only cases whose name contains any string from the specified ones.
    #[structopt(short = "p", long = "path")]
    pub paths: Vec<String>,

    /// Sets the number of threads, which execute the cases concurrently.
    #[structopt(short = "t", long = "threads")]
    pub threads: Option<usize>,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }
}
