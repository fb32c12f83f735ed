// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for commitvet.
//!
//! This module handles command-line argument parsing and the check run.

pub mod args;
mod dispatch;

pub use args::{Cli, OutputFormat};
pub use dispatch::run;
