// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Case style detection for subject lines.
//!
//! Styles are matched by capitalization patterns over ASCII letters.
//! Subjects that do not begin with an ASCII letter are exempt and match
//! no style at all, so "2FA support" or "'quoted' fix" never trip the
//! subject-case rule.

use crate::config::CaseStyle;

/// Returns true when `subject` is written in `style`.
pub fn matches_style(subject: &str, style: CaseStyle) -> bool {
    let subject = subject.trim();
    let Some(first) = subject.chars().next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }

    match style {
        CaseStyle::SentenceCase => is_sentence_case(subject),
        CaseStyle::StartCase => is_start_case(subject),
        CaseStyle::PascalCase => is_pascal_case(subject),
        CaseStyle::UpperCase => is_upper_case(subject),
    }
}

/// "Fix the formatter": leading capital, no capitals after it.
fn is_sentence_case(subject: &str) -> bool {
    let mut chars = subject.chars();
    let leading_upper = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    leading_upper && chars.all(|c| !c.is_ascii_uppercase())
}

/// "Fix The Formatter": every word opens with a capital letter.
fn is_start_case(subject: &str) -> bool {
    let mut saw_word = false;
    for word in subject.split_whitespace() {
        let Some(first_letter) = word.chars().find(|c| c.is_ascii_alphabetic()) else {
            continue;
        };
        saw_word = true;
        if !first_letter.is_ascii_uppercase() {
            return false;
        }
    }
    saw_word
}

/// "FixFormatter": one capitalized alphanumeric word with at least one
/// lowercase letter to tell it apart from upper-case.
fn is_pascal_case(subject: &str) -> bool {
    if subject.contains(char::is_whitespace) {
        return false;
    }
    let mut chars = subject.chars();
    let leading_upper = chars.next().is_some_and(|c| c.is_ascii_uppercase());
    leading_upper
        && subject.chars().any(|c| c.is_ascii_lowercase())
        && subject.chars().all(|c| c.is_ascii_alphanumeric())
}

/// "FIX THE FORMATTER": no lowercase letters anywhere.
fn is_upper_case(subject: &str) -> bool {
    !subject.chars().any(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_case() {
        assert!(matches_style("Fix the formatter", CaseStyle::SentenceCase));
        assert!(matches_style("Fix", CaseStyle::SentenceCase));
        assert!(matches_style("Fix line width.", CaseStyle::SentenceCase));
        assert!(!matches_style("fix the formatter", CaseStyle::SentenceCase));
        assert!(!matches_style("Fix The formatter", CaseStyle::SentenceCase));
        assert!(!matches_style("FIX", CaseStyle::SentenceCase));
    }

    #[test]
    fn test_start_case() {
        assert!(matches_style("Fix The Formatter", CaseStyle::StartCase));
        assert!(matches_style("Correct Line Width", CaseStyle::StartCase));
        assert!(!matches_style("Fix the formatter", CaseStyle::StartCase));
        assert!(!matches_style("fix the formatter", CaseStyle::StartCase));
        // All-caps words open with a capital too.
        assert!(matches_style("FIX THE FORMATTER", CaseStyle::StartCase));
    }

    #[test]
    fn test_pascal_case() {
        assert!(matches_style("FixFormatter", CaseStyle::PascalCase));
        assert!(matches_style("Fix", CaseStyle::PascalCase));
        assert!(!matches_style("fixFormatter", CaseStyle::PascalCase));
        assert!(!matches_style("Fix Formatter", CaseStyle::PascalCase));
        assert!(!matches_style("FIX", CaseStyle::PascalCase));
        assert!(!matches_style("Fix-formatter", CaseStyle::PascalCase));
    }

    #[test]
    fn test_upper_case() {
        assert!(matches_style("FIX THE FORMATTER", CaseStyle::UpperCase));
        assert!(matches_style("FIX #123", CaseStyle::UpperCase));
        assert!(!matches_style("Fix the formatter", CaseStyle::UpperCase));
        assert!(!matches_style("FIx", CaseStyle::UpperCase));
    }

    #[test]
    fn test_non_letter_start_is_exempt() {
        assert!(!matches_style("2FA SUPPORT", CaseStyle::UpperCase));
        assert!(!matches_style("'Quoted' fix", CaseStyle::SentenceCase));
        assert!(!matches_style("", CaseStyle::SentenceCase));
        assert!(!matches_style("   ", CaseStyle::UpperCase));
    }

    #[test]
    fn test_lowercase_subject_matches_nothing() {
        for style in [
            CaseStyle::SentenceCase,
            CaseStyle::StartCase,
            CaseStyle::PascalCase,
            CaseStyle::UpperCase,
        ] {
            assert!(!matches_style("correct line width", style));
        }
    }
}
