// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;
use std::path::Path;

use console::style;

use crate::config::Config;
use crate::error::{CheckError, ConfigError, Result, VetError};
use crate::message::is_ignored;
use crate::rules::Linter;

use super::args::{Cli, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration first: a broken artifact aborts the run before
    // any message is read or evaluated.
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load()?
    };

    if cli.print_config {
        return print_effective_config(&config);
    }

    run_check(&cli, config)
}

/// Check one message and report the outcome.
fn run_check(cli: &Cli, config: Config) -> Result<()> {
    let raw = read_message(cli.message_file.as_deref())?;

    if is_ignored(&raw) {
        tracing::debug!("Message follows a git tooling format, skipping checks");
        match cli.format {
            Some(OutputFormat::Json) => {
                let json = serde_json::json!({ "valid": true, "ignored": true });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json).unwrap_or_default()
                );
            }
            _ => {
                println!(
                    "{} generated by git tooling, nothing to check",
                    style("✓").green().bold()
                );
            }
        }
        return Ok(());
    }

    let linter = Linter::new(config);
    let report = linter.check_str(&raw)?;

    match cli.format {
        Some(OutputFormat::Json) => println!(
            "{}",
            serde_json::to_string_pretty(&report.to_json()).unwrap_or_default()
        ),
        _ => println!("{}", report.render_text()),
    }

    let errors = report.error_count();
    let warnings = report.warning_count();
    if errors > 0 || (cli.strict && warnings > 0) {
        return Err(CheckError::ViolationsFound { errors, warnings }.into());
    }
    Ok(())
}

/// Read the message from a file, or from standard input for `-`/nothing.
fn read_message(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            tracing::debug!("Reading message from {:?}", path);
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            tracing::debug!("Reading message from standard input");
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

/// Print the effective configuration, defaults filled in, as TOML.
fn print_effective_config(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config).map_err(|e| {
        VetError::Config(ConfigError::RenderError {
            message: e.to_string(),
        })
    })?;
    print!("{}", rendered);
    Ok(())
}
