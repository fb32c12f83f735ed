// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit message checks.
//!
//! This module evaluates a configured rule set against parsed commit
//! messages and collects the outcome into a deterministic report.

mod builtin;
mod case;
mod engine;
mod report;

pub use builtin::apply_rules;
pub use case::matches_style;
pub use engine::Linter;
pub use report::{Report, RuleId, Violation};
