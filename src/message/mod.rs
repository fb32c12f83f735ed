// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

mod parser;

pub use parser::is_ignored;

use crate::error::Result;

/// A parsed conventional commit message.
///
/// Parsing is purely syntactic: `commit_type` is whatever word precedes
/// the colon, and whether it is an allowed type is a rule concern, not a
/// parse concern. A `Message` is built once by [`Message::parse`] and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// The full first line, exactly as written.
    pub header: String,

    /// Commit type (feat, fix, ...).
    pub commit_type: String,

    /// Scope, if present. `Some("")` records an explicit empty `()` pair,
    /// which is not the same as no scope at all.
    pub scope: Option<String>,

    /// Whether the header carries the `!` breaking-change marker.
    pub breaking: bool,

    /// Subject: the header text after the colon separator, with the
    /// single conventional space removed.
    pub subject: String,

    /// Body paragraphs, if any.
    pub body: Option<String>,

    /// Footer: the trailing git-trailer paragraph, if any.
    pub footer: Option<String>,

    /// Whether a blank line separated header and body.
    pub body_leading_blank: bool,

    /// Whether a blank line preceded the footer.
    pub footer_leading_blank: bool,
}

impl Message {
    /// Parse a commit message from a string.
    pub fn parse(raw: &str) -> Result<Self> {
        parser::parse(raw)
    }

    /// Header length in characters, not bytes.
    pub fn header_len(&self) -> usize {
        self.header.chars().count()
    }
}
