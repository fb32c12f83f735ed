// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit message checks.

use crate::config::Config;
use crate::error::Result;
use crate::message::Message;

use super::builtin::apply_rules;
use super::report::Report;

/// Applies a rule set to commit messages.
///
/// Checking is a pure function of the configuration and the message. A
/// `Linter` can be reused across any number of messages and gives the
/// same report for the same input every time.
#[derive(Debug, Clone)]
pub struct Linter {
    config: Config,
}

impl Linter {
    /// Create a new linter with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Check a parsed commit message.
    pub fn check(&self, message: &Message) -> Report {
        let violations = apply_rules(message, &self.config.rules);
        tracing::debug!(
            "Checked {:?}: {} violations",
            message.header,
            violations.len()
        );
        Report::new(message.header.clone(), violations)
    }

    /// Parse and check a raw commit message.
    pub fn check_str(&self, raw: &str) -> Result<Report> {
        let message = Message::parse(raw)?;
        Ok(self.check(&message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Applicability, RuleDef, Severity};
    use crate::rules::RuleId;

    fn default_linter() -> Linter {
        Linter::new(Config::default())
    }

    #[test]
    fn test_clean_message_passes() {
        let report = default_linter()
            .check_str("feat: add new security rule")
            .unwrap();
        assert!(report.is_valid());
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_trailing_full_stop_is_single_error() {
        let report = default_linter()
            .check_str("fix(formatter): correct line width.")
            .unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, RuleId::SubjectFullStop);
        assert_eq!(report.violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_capitalized_type_fails_type_enum_only() {
        // The lowercase subject matches no disallowed case style, so the
        // unknown type is the only violation.
        let report = default_linter().check_str("Fix: bug").unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].rule, RuleId::TypeEnum);
        assert_eq!(report.violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_long_header_is_error() {
        let raw = format!("feat: {}", "a".repeat(70));
        let report = default_linter().check_str(&raw).unwrap();
        assert!(!report.is_valid());
        assert_eq!(report.violations[0].rule, RuleId::HeaderMaxLength);
    }

    #[test]
    fn test_unknown_scope_is_warning_only() {
        let report = default_linter()
            .check_str("feat(gui): add window chrome")
            .unwrap();
        assert!(report.is_valid());
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.violations[0].rule, RuleId::ScopeEnum);
    }

    #[test]
    fn test_missing_body_blank_line_is_warning() {
        let report = default_linter()
            .check_str("fix: correct line width\nthe formatter clipped at 80")
            .unwrap();
        assert!(report.is_valid());
        assert_eq!(report.violations[0].rule, RuleId::BodyLeadingBlank);
        assert_eq!(report.violations[0].severity, Severity::Warning);
    }

    #[test]
    fn test_check_is_idempotent() {
        let linter = default_linter();
        let message = Message::parse("feature(gui): Correct line width.").unwrap();

        let first = linter.check(&message);
        let second = linter.check(&message);
        assert_eq!(first, second);
        assert_eq!(first.violations.len(), 4);
    }

    #[test]
    fn test_malformed_message_is_fatal() {
        assert!(default_linter().check_str("Fix bug").is_err());
        assert!(default_linter().check_str("").is_err());
    }

    #[test]
    fn test_custom_type_set() {
        let mut config = Config::default();
        config.rules.type_enum = RuleDef::new(
            Severity::Error,
            Applicability::Always,
            vec!["merge".to_string(), "patch".to_string()],
        );
        let linter = Linter::new(config);

        assert!(linter.check_str("patch: tighten bounds").unwrap().is_valid());
        assert!(!linter.check_str("feat: tighten bounds").unwrap().is_valid());
    }

    #[test]
    fn test_disabled_rules_drop_out() {
        let mut config = Config::default();
        config.rules.subject_full_stop = RuleDef::off();
        config.rules.header_max_length = RuleDef::off();
        let linter = Linter::new(config);

        let raw = format!("fix: {}.", "a".repeat(100));
        let report = linter.check_str(&raw).unwrap();
        assert!(report.is_valid());
    }
}
