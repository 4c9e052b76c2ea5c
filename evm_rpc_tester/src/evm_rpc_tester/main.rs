//!
//! The EVM RPC conformance tester executable.
//!

pub(crate) mod arguments;

use std::time::Instant;

use colored::Colorize;

use self::arguments::Arguments;

/// The process exit code on success.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    env_logger::init();

    let exit_code = match main_inner(Arguments::new()) {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let mut thread_pool_builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = arguments.threads {
        thread_pool_builder = thread_pool_builder.num_threads(threads);
    }
    if let Err(error) = thread_pool_builder.build_global() {
        log::debug!("The global thread pool is already configured: {error}");
    }

    let mut config = match arguments.config {
        Some(ref path) => evm_rpc_tester::TestConfig::read(path.as_path())?,
        None => evm_rpc_tester::TestConfig::default(),
    };
    if let Some(timeout) = arguments.timeout {
        if timeout == 0 {
            anyhow::bail!("The RPC timeout must be positive");
        }
        config.rpc_timeout_secs = timeout;
    }

    let summary = evm_rpc_tester::Summary::new(arguments.verbosity, arguments.quiet).wrap();

    let filters = evm_rpc_tester::Filters::new(arguments.paths);

    let rpc_tester = evm_rpc_tester::RpcTester::new(summary.clone(), filters, config)?;

    let run_time_start = Instant::now();
    if !arguments.quiet {
        println!(
            "     {} cases against {} with {} worker threads",
            "Running".bright_green().bold(),
            arguments.url,
            rayon::current_num_threads(),
        );
    }

    rpc_tester.run(arguments.url.as_str())?;

    let summary = evm_rpc_tester::Summary::unwrap_arc(summary)?;
    print!("{summary}");
    if !arguments.quiet {
        println!(
            "    {} running cases in {}m{:02}s",
            "Finished".bright_green().bold(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
        );
    }

    if !summary.is_successful() {
        anyhow::bail!("Some conformance cases have not passed");
    }

    Ok(())
}
