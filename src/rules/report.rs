// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Check report types.
//!
//! A report is plain data. Rendering it, printing it and turning it into
//! an exit code are caller concerns; nothing here writes to stdout.

use console::{style, Style};
use serde::Serialize;
use std::fmt;

use crate::config::Severity;

/// Identifies a rule in reports and rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    TypeEnum,
    SubjectEmpty,
    SubjectFullStop,
    SubjectCase,
    BodyLeadingBlank,
    FooterLeadingBlank,
    HeaderMaxLength,
    ScopeEmpty,
    ScopeEnum,
}

impl RuleId {
    /// Get the rule name as written in the configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::TypeEnum => "type-enum",
            RuleId::SubjectEmpty => "subject-empty",
            RuleId::SubjectFullStop => "subject-full-stop",
            RuleId::SubjectCase => "subject-case",
            RuleId::BodyLeadingBlank => "body-leading-blank",
            RuleId::FooterLeadingBlank => "footer-leading-blank",
            RuleId::HeaderMaxLength => "header-max-length",
            RuleId::ScopeEmpty => "scope-empty",
            RuleId::ScopeEnum => "scope-enum",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Rule that produced the violation.
    pub rule: RuleId,
    /// Severity the rule is configured at.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(rule: RuleId, severity: Severity, message: String) -> Self {
        Self {
            rule,
            severity,
            message,
        }
    }

    /// Format the violation for terminal output.
    pub fn format(&self) -> String {
        let prefix = match self.severity {
            Severity::Error => style("✗").red().bold(),
            _ => style("⚠").yellow().bold(),
        };
        let rule_style = match self.severity {
            Severity::Error => Style::new().red(),
            _ => Style::new().yellow(),
        };

        format!(
            "{} {} {}",
            prefix,
            rule_style.apply_to(self.rule.as_str()),
            self.message
        )
    }
}

/// Result of checking one commit message.
///
/// Violations appear in the order the configuration declares the rules,
/// so two runs over the same input produce identical reports.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Header line of the checked message.
    pub header: String,
    /// All violations, in rule declaration order.
    pub violations: Vec<Violation>,
}

impl Report {
    /// Create a new report.
    pub fn new(header: String, violations: Vec<Violation>) -> Self {
        Self { header, violations }
    }

    /// Check if the message passed (no error-severity violations).
    /// Warnings do not fail a report.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Number of error-severity violations.
    pub fn error_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity.is_blocking())
            .count()
    }

    /// Number of warning-severity violations.
    pub fn warning_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| !v.severity.is_blocking())
            .count()
    }

    /// Render the report for terminal output.
    pub fn render_text(&self) -> String {
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        let mut output = format!("{} {}", status, self.header);
        for violation in &self.violations {
            output.push_str(&format!("\n  {}", violation.format()));
        }
        if !self.violations.is_empty() {
            output.push('\n');
            output.push_str(&self.summary());
        }
        output
    }

    /// Build the JSON form of the report.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "header": self.header,
            "violations": self.violations,
            "errors": self.error_count(),
            "warnings": self.warning_count(),
        })
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warning_count() == 0 {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warning_count())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.error_count(),
                self.warning_count()
            )
        }
    }
}
