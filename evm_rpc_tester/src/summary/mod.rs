//!
//! The conformance tester summary.
//!

pub mod element;

use std::sync::Arc;
use std::sync::Mutex;

use colored::Colorize;

use self::element::outcome::Outcome;
use self::element::Element;

///
/// The conformance tester summary.
///
#[derive(Debug)]
pub struct Summary {
    /// The summary elements.
    elements: Vec<Element>,
    /// The output verbosity.
    verbosity: bool,
    /// Whether the output is suppressed.
    quiet: bool,
    /// The passed cases counter.
    passed: usize,
    /// The failed cases counter.
    failed: usize,
    /// The invalid cases counter.
    invalid: usize,
    /// The ignored cases counter.
    ignored: usize,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(verbosity: bool, quiet: bool) -> Self {
        Self {
            elements: Vec::new(),
            verbosity,
            quiet,
            passed: 0,
            failed: 0,
            invalid: 0,
            ignored: 0,
        }
    }

    ///
    /// Whether the test run has been successful.
    ///
    pub fn is_successful(&self) -> bool {
        self.elements.iter().all(|element| {
            matches!(element.outcome, Outcome::Passed { .. } | Outcome::Ignored)
        })
    }

    ///
    /// The number of passed cases.
    ///
    pub fn passed_count(&self) -> usize {
        self.passed
    }

    ///
    /// The number of failed cases.
    ///
    pub fn failed_count(&self) -> usize {
        self.failed
    }

    ///
    /// The number of invalid cases.
    ///
    pub fn invalid_count(&self) -> usize {
        self.invalid
    }

    ///
    /// The number of ignored cases.
    ///
    pub fn ignored_count(&self) -> usize {
        self.ignored
    }

    ///
    /// Wraps data into a thread-safe shared reference.
    ///
    pub fn wrap(self) -> Arc<Mutex<Self>> {
        Arc::new(Mutex::new(self))
    }

    ///
    /// Extracts the data from the thread-safe shared reference.
    ///
    pub fn unwrap_arc(summary: Arc<Mutex<Self>>) -> anyhow::Result<Self> {
        Arc::try_unwrap(summary)
            .map_err(|_| anyhow::anyhow!("The summary is still shared"))?
            .into_inner()
            .map_err(|_| anyhow::anyhow!("The summary lock is poisoned"))
    }

    ///
    /// Adds a passed outcome.
    ///
    pub fn passed<S>(summary: Arc<Mutex<Self>>, name: String, observed: S)
    where
        S: ToString,
    {
        let element = Element::new(name, Outcome::passed(observed));
        Self::push(summary, element);
    }

    ///
    /// Adds a failed outcome.
    ///
    pub fn failed(
        summary: Arc<Mutex<Self>>,
        name: String,
        expected: String,
        actual: String,
        transaction: &[u8],
    ) {
        let element = Element::new(name, Outcome::failed(expected, actual, transaction));
        Self::push(summary, element);
    }

    ///
    /// Adds an invalid outcome.
    ///
    pub fn invalid(summary: Arc<Mutex<Self>>, name: String, error: &anyhow::Error) {
        let element = Element::new(name, Outcome::invalid(error));
        Self::push(summary, element);
    }

    ///
    /// Adds an ignored outcome.
    ///
    pub fn ignored(summary: Arc<Mutex<Self>>, name: String) {
        let element = Element::new(name, Outcome::ignored());
        Self::push(summary, element);
    }

    fn push(summary: Arc<Mutex<Self>>, element: Element) {
        match summary.lock() {
            Ok(mut summary) => summary.push_element(element),
            Err(poisoned) => poisoned.into_inner().push_element(element),
        }
    }

    ///
    /// Pushes an element to the summary, printing it.
    ///
    fn push_element(&mut self, element: Element) {
        if !self.quiet {
            if let Some(string) = element.print(self.verbosity) {
                println!("{string}");
            }
        }

        match element.outcome {
            Outcome::Passed { .. } => self.passed += 1,
            Outcome::Failed { .. } => self.failed += 1,
            Outcome::Invalid { .. } => self.invalid += 1,
            Outcome::Ignored => self.ignored += 1,
        }

        self.elements.push(element);
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.quiet {
            return Ok(());
        }

        writeln!(
            f,
            "╔═══════════════════╡ CONFORMANCE TESTING ╞════════════════════╗"
        )?;
        writeln!(
            f,
            "║                                                              ║"
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "PASSED".green(),
            self.passed.to_string().green(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "FAILED".bright_red(),
            self.failed.to_string().bright_red(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "INVALID".red(),
            self.invalid.to_string().red(),
        )?;
        writeln!(
            f,
            "║     {:7}                                   {:10}     ║",
            "IGNORED".bright_black(),
            self.ignored.to_string().bright_black(),
        )?;
        writeln!(
            f,
            "╚══════════════════════════════════════════════════════════════╝"
        )?;

        Ok(())
    }
}
