// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conventional commit grammar.
//!
//! The header is split with a regex over `type(scope)!?: subject`. The
//! remaining lines are split into body and footer, where the footer is the
//! trailing contiguous paragraph whose first line looks like a git trailer
//! (`Token: value`, `Token #ref` or a BREAKING CHANGE note).

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{MessageError, Result};

use super::Message;

lazy_static! {
    /// Regex for the conventional commit header.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>\w+)(?:\((?P<scope>[^()]*)\))?(?P<breaking>!)?:(?P<rest>.*)$"
    ).unwrap();

    /// First line of a git trailer block.
    static ref TRAILER_REGEX: Regex = Regex::new(
        r"^(?:BREAKING[- ]CHANGE|[A-Za-z][A-Za-z0-9-]*)(?::[ \t]|[ \t]+#)"
    ).unwrap();

    /// Messages produced by git tooling rather than a person.
    static ref IGNORED_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"^Merge (?:pull request|branch|tag|remote-tracking branch) ").unwrap(),
        Regex::new(r"^Merge .+ into .+").unwrap(),
        Regex::new(r"^Automatic merge").unwrap(),
        Regex::new(r"^Auto-merged .+ into .+").unwrap(),
        Regex::new(r"^(?:fixup|squash)!").unwrap(),
        Regex::new(r#"^Revert ".+""#).unwrap(),
    ];
}

/// Returns true for messages that follow a git tooling format instead of
/// the conventional one: merges, fixup!/squash! commits, revert output.
pub fn is_ignored(raw: &str) -> bool {
    let message = raw.trim_start();
    IGNORED_PATTERNS
        .iter()
        .any(|pattern| pattern.is_match(message))
}

/// Parse a raw commit message.
pub(super) fn parse(raw: &str) -> Result<Message> {
    if raw.trim().is_empty() {
        return Err(MessageError::Empty.into());
    }

    let lines: Vec<&str> = raw.lines().collect();
    // git strips leading blank lines from a message; do the same
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(0);
    let header = lines[start].to_string();

    let captures = HEADER_REGEX
        .captures(&header)
        .ok_or_else(|| MessageError::MalformedHeader {
            header: header.clone(),
        })?;

    let rest = captures.name("rest").map(|m| m.as_str()).unwrap_or("");
    if rest.is_empty() {
        return Err(MessageError::MissingSubject {
            header: header.clone(),
        }
        .into());
    }
    // One space after the colon belongs to the separator, the rest of the
    // line is the subject. "feat: " therefore has an empty subject, which
    // parses fine and is left for the subject-empty rule to flag.
    let subject = rest.strip_prefix(' ').unwrap_or(rest).to_string();

    let commit_type = captures
        .name("type")
        .map(|m| m.as_str())
        .unwrap_or("")
        .to_string();
    let scope = captures.name("scope").map(|m| m.as_str().to_string());
    let breaking = captures.name("breaking").is_some();

    let sections = split_sections(&lines[start + 1..]);

    Ok(Message {
        header,
        commit_type,
        scope,
        breaking,
        subject,
        body: sections.body,
        footer: sections.footer,
        body_leading_blank: sections.body_leading_blank,
        footer_leading_blank: sections.footer_leading_blank,
    })
}

#[derive(Default)]
struct Sections {
    body: Option<String>,
    footer: Option<String>,
    body_leading_blank: bool,
    footer_leading_blank: bool,
}

/// Split the lines after the header into body and footer.
///
/// The blank-line bookkeeping is recorded here because the leading-blank
/// rules consume it later; by the time they run, the original line layout
/// is gone.
fn split_sections(lines: &[&str]) -> Sections {
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let last = lines.iter().rposition(|line| !line.trim().is_empty());
    let (Some(first), Some(last)) = (first, last) else {
        return Sections::default();
    };

    // Trailing paragraph: contiguous non-blank lines ending at `last`.
    let mut para_start = last;
    while para_start > first && !lines[para_start - 1].trim().is_empty() {
        para_start -= 1;
    }

    if !TRAILER_REGEX.is_match(lines[para_start]) {
        // No trailer block; everything is body.
        return Sections {
            body: Some(lines[first..=last].join("\n")),
            footer: None,
            body_leading_blank: first >= 1,
            footer_leading_blank: false,
        };
    }

    let footer = lines[para_start..=last].join("\n");

    if para_start == first {
        // Footer only, no body.
        return Sections {
            body: None,
            footer: Some(footer),
            body_leading_blank: false,
            footer_leading_blank: first >= 1,
        };
    }

    let body_end = lines[first..para_start]
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map(|offset| first + offset)
        .unwrap_or(first);

    Sections {
        body: Some(lines[first..=body_end].join("\n")),
        footer: Some(footer),
        body_leading_blank: first >= 1,
        footer_leading_blank: lines[para_start - 1].trim().is_empty(),
    }
}
