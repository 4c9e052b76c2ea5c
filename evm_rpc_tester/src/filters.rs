//!
//! The conformance tester filters.
//!

use std::collections::HashSet;

///
/// The conformance tester filters.
///
#[derive(Debug, Default)]
pub struct Filters {
    /// The case name filters.
    name_filters: HashSet<String>,
}

impl Filters {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name_filters: Vec<String>) -> Self {
        Self {
            name_filters: name_filters.into_iter().collect(),
        }
    }

    ///
    /// Check if the case name is compatible with the filters.
    ///
    pub fn check_case_name(&self, name: &str) -> bool {
        self.name_filters.is_empty() || self.name_filters.iter().any(|filter| name.contains(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::Filters;

    #[test]
    fn empty_filters_accept_everything() {
        assert!(Filters::default().check_case_name("evm_space::out_of_balance"));
    }

    #[test]
    fn filters_match_substrings() {
        let filters = Filters::new(vec!["balance".to_owned()]);
        assert!(filters.check_case_name("evm_space::out_of_balance"));
        assert!(!filters.check_case_name("evm_space::nonce_too_low"));
    }
}
