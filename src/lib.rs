// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitvet - Conventional Commit Message Linter
//!
//! Checks commit messages against a configurable conventional-commits
//! rule set and reports every violation in one pass.
//!
//! # Features
//!
//! - **Message Parser**: splits a raw message into header, body and footer
//!   and derives type, scope and subject from the header
//! - **Rule Engine**: nine configurable rules with off/warning/error
//!   severities, evaluated without short-circuiting
//! - **Reporter**: deterministic text and JSON reports, violations in
//!   rule declaration order
//! - **Commitlint-style configuration**: `[severity, when, value]`
//!   tuples with numeric or symbolic severities
//!
//! # Example
//!
//! ```
//! use commitvet::{Config, Linter};
//!
//! let linter = Linter::new(Config::default());
//!
//! let report = linter.check_str("feat: add new security rule").unwrap();
//! assert!(report.is_valid());
//!
//! let report = linter.check_str("fix(formatter): correct line width.").unwrap();
//! assert_eq!(report.error_count(), 1);
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod message;
pub mod rules;

// Re-exports for convenience
pub use config::Config;
pub use error::{Result, VetError};
pub use message::Message;
pub use rules::{Linter, Report, Violation};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitvet.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
