// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rules.
//!
//! Each check resolves one [`RuleDef`] against the message and returns at
//! most one violation. `always` means the predicate must hold, `never`
//! means it must not; `never` flips the check, it does not switch it off.

use crate::config::{Applicability, CaseStyle, RuleDef, RuleSet};
use crate::message::Message;

use super::case;
use super::report::{RuleId, Violation};

/// Apply every configured rule to a message.
///
/// Rules run in the order the configuration declares them and never
/// short-circuit: one run reports every violation at once.
pub fn apply_rules(message: &Message, rules: &RuleSet) -> Vec<Violation> {
    let mut violations = Vec::new();

    violations.extend(check_type_enum(message, &rules.type_enum));
    violations.extend(check_subject_empty(message, &rules.subject_empty));
    violations.extend(check_subject_full_stop(message, &rules.subject_full_stop));
    violations.extend(check_subject_case(message, &rules.subject_case));
    violations.extend(check_body_leading_blank(message, &rules.body_leading_blank));
    violations.extend(check_footer_leading_blank(
        message,
        &rules.footer_leading_blank,
    ));
    violations.extend(check_header_max_length(message, &rules.header_max_length));
    violations.extend(check_scope_empty(message, &rules.scope_empty));
    violations.extend(check_scope_enum(message, &rules.scope_enum));

    violations
}

/// Whether a predicate outcome violates the rule's applicability.
fn violates(when: Applicability, holds: bool) -> bool {
    match when {
        Applicability::Always => !holds,
        Applicability::Never => holds,
    }
}

/// `type-enum`: the type must be a member of the configured set.
fn check_type_enum(message: &Message, rule: &RuleDef<Vec<String>>) -> Option<Violation> {
    if rule.is_off() {
        return None;
    }
    let types = rule.param.as_deref().unwrap_or_default();
    // An empty set constrains nothing.
    if types.is_empty() {
        return None;
    }

    let when = rule.when_or(Applicability::Always);
    let holds = types.iter().any(|t| t == &message.commit_type);
    if !violates(when, holds) {
        return None;
    }

    let text = match when {
        Applicability::Always => format!(
            "type must be one of [{}], got '{}'",
            types.join(", "),
            message.commit_type
        ),
        Applicability::Never => format!("type must not be one of [{}]", types.join(", ")),
    };
    Some(Violation::new(RuleId::TypeEnum, rule.severity, text))
}

/// `subject-empty`: whether the trimmed subject is empty.
fn check_subject_empty(message: &Message, rule: &RuleDef<()>) -> Option<Violation> {
    if rule.is_off() {
        return None;
    }

    let when = rule.when_or(Applicability::Never);
    let holds = message.subject.trim().is_empty();
    if !violates(when, holds) {
        return None;
    }

    let text = match when {
        Applicability::Always => "subject must be empty".to_string(),
        Applicability::Never => "subject may not be empty".to_string(),
    };
    Some(Violation::new(RuleId::SubjectEmpty, rule.severity, text))
}

/// `subject-full-stop`: whether the subject ends with the configured
/// character, '.' unless the artifact says otherwise.
fn check_subject_full_stop(message: &Message, rule: &RuleDef<char>) -> Option<Violation> {
    if rule.is_off() {
        return None;
    }

    let stop = rule.param.unwrap_or('.');
    let when = rule.when_or(Applicability::Never);
    let holds = message.subject.ends_with(stop);
    if !violates(when, holds) {
        return None;
    }

    let text = match when {
        Applicability::Always => format!("subject must end with '{}'", stop),
        Applicability::Never => format!("subject may not end with '{}'", stop),
    };
    Some(Violation::new(RuleId::SubjectFullStop, rule.severity, text))
}

/// `subject-case`: whether the subject matches any configured case style.
fn check_subject_case(message: &Message, rule: &RuleDef<Vec<CaseStyle>>) -> Option<Violation> {
    if rule.is_off() {
        return None;
    }
    let styles = rule.param.as_deref().unwrap_or_default();
    if styles.is_empty() {
        return None;
    }

    let when = rule.when_or(Applicability::Never);
    let holds = styles
        .iter()
        .any(|style| case::matches_style(&message.subject, *style));
    if !violates(when, holds) {
        return None;
    }

    let names: Vec<&str> = styles.iter().map(|style| style.as_str()).collect();
    let text = match when {
        Applicability::Always => format!("subject must be {}", names.join(", ")),
        Applicability::Never => format!("subject must not be {}", names.join(", ")),
    };
    Some(Violation::new(RuleId::SubjectCase, rule.severity, text))
}

/// `body-leading-blank`: whether a blank line separates header and body.
/// Messages without a body pass.
fn check_body_leading_blank(message: &Message, rule: &RuleDef<()>) -> Option<Violation> {
    if rule.is_off() || message.body.is_none() {
        return None;
    }

    let when = rule.when_or(Applicability::Always);
    let holds = message.body_leading_blank;
    if !violates(when, holds) {
        return None;
    }

    let text = match when {
        Applicability::Always => "body must have leading blank line".to_string(),
        Applicability::Never => "body must not have leading blank line".to_string(),
    };
    Some(Violation::new(RuleId::BodyLeadingBlank, rule.severity, text))
}

/// `footer-leading-blank`: whether a blank line precedes the footer.
/// Messages without a footer pass.
fn check_footer_leading_blank(message: &Message, rule: &RuleDef<()>) -> Option<Violation> {
    if rule.is_off() || message.footer.is_none() {
        return None;
    }

    let when = rule.when_or(Applicability::Always);
    let holds = message.footer_leading_blank;
    if !violates(when, holds) {
        return None;
    }

    let text = match when {
        Applicability::Always => "footer must have leading blank line".to_string(),
        Applicability::Never => "footer must not have leading blank line".to_string(),
    };
    Some(Violation::new(
        RuleId::FooterLeadingBlank,
        rule.severity,
        text,
    ))
}

/// `header-max-length`: header length in characters against the limit.
fn check_header_max_length(message: &Message, rule: &RuleDef<usize>) -> Option<Violation> {
    if rule.is_off() {
        return None;
    }
    // Loading validates that an enabled rule carries a limit.
    let limit = rule.param?;

    let when = rule.when_or(Applicability::Always);
    let length = message.header_len();
    let holds = length <= limit;
    if !violates(when, holds) {
        return None;
    }

    let text = match when {
        Applicability::Always => format!(
            "header must not be longer than {} characters, current length is {}",
            limit, length
        ),
        Applicability::Never => format!(
            "header must be longer than {} characters, current length is {}",
            limit, length
        ),
    };
    Some(Violation::new(RuleId::HeaderMaxLength, rule.severity, text))
}

/// `scope-empty`: whether the scope is absent or blank.
fn check_scope_empty(message: &Message, rule: &RuleDef<()>) -> Option<Violation> {
    if rule.is_off() {
        return None;
    }

    let when = rule.when_or(Applicability::Never);
    let holds = message
        .scope
        .as_deref()
        .map_or(true, |scope| scope.trim().is_empty());
    if !violates(when, holds) {
        return None;
    }

    let text = match when {
        Applicability::Always => "scope must be empty".to_string(),
        Applicability::Never => "scope may not be empty".to_string(),
    };
    Some(Violation::new(RuleId::ScopeEmpty, rule.severity, text))
}

/// `scope-enum`: a present, non-blank scope must be a member of the
/// configured set. Absent scopes are scope-empty territory, not ours.
fn check_scope_enum(message: &Message, rule: &RuleDef<Vec<String>>) -> Option<Violation> {
    if rule.is_off() {
        return None;
    }
    let scopes = rule.param.as_deref().unwrap_or_default();
    if scopes.is_empty() {
        return None;
    }
    let scope = message.scope.as_deref().filter(|s| !s.trim().is_empty())?;

    let when = rule.when_or(Applicability::Always);
    let holds = scopes.iter().any(|s| s == scope);
    if !violates(when, holds) {
        return None;
    }

    let text = match when {
        Applicability::Always => format!(
            "scope must be one of [{}], got '{}'",
            scopes.join(", "),
            scope
        ),
        Applicability::Never => format!("scope must not be one of [{}]", scopes.join(", ")),
    };
    Some(Violation::new(RuleId::ScopeEnum, rule.severity, text))
}
