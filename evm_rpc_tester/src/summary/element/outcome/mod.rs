//!
//! The conformance tester summary element outcome.
//!

///
/// The conformance tester summary element outcome.
///
#[derive(Debug)]
pub enum Outcome {
    /// The `passed` outcome. The node behaved as expected.
    Passed {
        /// The observed node response.
        observed: String,
    },
    /// The `failed` outcome. The node responded differently.
    Failed {
        /// The expected node response.
        expected: String,
        /// The actual node response.
        actual: String,
        /// The submitted transaction.
        transaction: String,
    },
    /// The `invalid` outcome. The case could not be executed.
    Invalid {
        /// The infrastructure error description.
        error: String,
    },
    /// The `ignored` outcome. The case is filtered out.
    Ignored,
}

impl Outcome {
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
    pub fn failed<S>(expected: S, actual: S, transaction: &[u8]) -> Self
    where
        S: ToString,
    {
        Self::Failed {
            expected: expected.to_string(),
            actual: actual.to_string(),
            transaction: hex::encode(transaction),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn invalid(error: &anyhow::Error) -> Self {
        Self::Invalid {
            error: format!("{error:#}"),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn ignored() -> Self {
        Self::Ignored
    }
}
