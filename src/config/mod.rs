// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for commitvet.
//!
//! This module handles locating, loading and validating the rule artifact
//! that drives the check run.

mod loader;
mod schema;

pub use loader::{
    find_config_file, find_config_file_from, load_config, load_config_from, parse_config,
    parse_config_json,
};
pub use schema::*;
