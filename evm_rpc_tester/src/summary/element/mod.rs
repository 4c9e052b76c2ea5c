//!
//! The conformance tester summary element.
//!

pub mod outcome;

use colored::Colorize;

use self::outcome::Outcome;

///
/// The conformance tester summary element.
///
#[derive(Debug)]
pub struct Element {
    /// The case name.
    pub name: String,
    /// The case outcome.
    pub outcome: Outcome,
}

impl Element {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, outcome: Outcome) -> Self {
        Self { name, outcome }
    }

    ///
    /// Prints the element.
    ///
    pub fn print(&self, verbosity: bool) -> Option<String> {
        match self.outcome {
            Outcome::Passed { .. } if !verbosity => return None,
            Outcome::Ignored => return None,
            _ => {}
        }

        let outcome = match self.outcome {
            Outcome::Passed { .. } => "PASSED".green(),
            Outcome::Failed { .. } => "FAILED".bright_red(),
            Outcome::Invalid { .. } => "INVALID".red(),
            Outcome::Ignored => "IGNORED".bright_black(),
        };

        let details = match self.outcome {
            Outcome::Passed { ref observed } => {
                format!("({})", format!("observed {observed}").bright_white())
            }
            Outcome::Failed {
                ref expected,
                ref actual,
                ref transaction,
            } => format!(
                "\n Expected: {expected}\n Actual:   {actual}\n (transaction 0x{transaction})"
            ),
            Outcome::Invalid { ref error } => error.to_owned(),
            Outcome::Ignored => String::new(),
        };

        Some(format!("{:>7} {} {}", outcome, self.name, details))
    }
}
