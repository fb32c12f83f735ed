// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Every rule is declared the way the commitlint artifact spells it: a
//! tuple of `[severity, applicability, value]`, for example
//! `header-max-length = [2, "always", 72]` or `scope-empty = [0]`. The
//! trailing elements are optional, which is why [`RuleDef`] carries its
//! own serde implementations instead of deriving them.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The main configuration structure for commitvet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Rule configuration.
    pub rules: RuleSet,
}

impl Config {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}

/// The rule table.
///
/// Field order matches the order the artifact declares the rules in, and
/// that order is also the order violations are reported in. Rule names the
/// artifact knows but this build does not are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RuleSet {
    /// Type must be a member of the configured set.
    pub type_enum: RuleDef<Vec<String>>,

    /// Subject, trimmed, must not be empty.
    pub subject_empty: RuleDef<()>,

    /// Subject must not end with the configured character.
    pub subject_full_stop: RuleDef<char>,

    /// Subject must not match any of the configured case styles.
    pub subject_case: RuleDef<Vec<CaseStyle>>,

    /// A blank line must separate header and body.
    pub body_leading_blank: RuleDef<()>,

    /// A blank line must precede the footer.
    pub footer_leading_blank: RuleDef<()>,

    /// Header must not exceed the configured length, in characters.
    pub header_max_length: RuleDef<usize>,

    /// Scope emptiness. Disabled in the default artifact.
    pub scope_empty: RuleDef<()>,

    /// Scope, when present, must be a member of the configured set.
    pub scope_enum: RuleDef<Vec<String>>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            type_enum: RuleDef::new(
                Severity::Error,
                Applicability::Always,
                vec![
                    "feat".to_string(),
                    "fix".to_string(),
                    "docs".to_string(),
                    "style".to_string(),
                    "refactor".to_string(),
                    "perf".to_string(),
                    "test".to_string(),
                    "build".to_string(),
                    "ci".to_string(),
                    "chore".to_string(),
                    "revert".to_string(),
                ],
            ),
            subject_empty: RuleDef::enabled(Severity::Error, Applicability::Never),
            subject_full_stop: RuleDef::new(Severity::Error, Applicability::Never, '.'),
            subject_case: RuleDef::new(
                Severity::Error,
                Applicability::Never,
                vec![
                    CaseStyle::SentenceCase,
                    CaseStyle::StartCase,
                    CaseStyle::PascalCase,
                    CaseStyle::UpperCase,
                ],
            ),
            body_leading_blank: RuleDef::enabled(Severity::Warning, Applicability::Always),
            footer_leading_blank: RuleDef::enabled(Severity::Warning, Applicability::Always),
            header_max_length: RuleDef::new(Severity::Error, Applicability::Always, 72),
            scope_empty: RuleDef::off(),
            scope_enum: RuleDef::new(
                Severity::Warning,
                Applicability::Always,
                vec![
                    "rules".to_string(),
                    "formatter".to_string(),
                    "deps".to_string(),
                    "ci".to_string(),
                    "docs".to_string(),
                    "examples".to_string(),
                    "tests".to_string(),
                    "release".to_string(),
                ],
            ),
        }
    }
}

/// A single rule definition.
///
/// `param` is only ever `Some` when `when` is as well; the tuple form has
/// no way to spell a value without an applicability before it.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDef<T> {
    /// How hard the rule bites.
    pub severity: Severity,

    /// Whether the rule's predicate must always hold or never hold.
    pub when: Option<Applicability>,

    /// Rule-specific value (allowed types, length limit, ...).
    pub param: Option<T>,
}

impl<T> RuleDef<T> {
    /// A rule with every element of the tuple present.
    pub fn new(severity: Severity, when: Applicability, param: T) -> Self {
        Self {
            severity,
            when: Some(when),
            param: Some(param),
        }
    }

    /// A rule without a value, e.g. `subject-empty = [2, "never"]`.
    pub fn enabled(severity: Severity, when: Applicability) -> Self {
        Self {
            severity,
            when: Some(when),
            param: None,
        }
    }

    /// A disabled rule, e.g. `scope-empty = [0]`.
    pub fn off() -> Self {
        Self {
            severity: Severity::Off,
            when: None,
            param: None,
        }
    }

    /// Whether the rule is disabled.
    pub fn is_off(&self) -> bool {
        self.severity == Severity::Off
    }

    /// The applicability, falling back to the rule's conventional default.
    pub fn when_or(&self, default: Applicability) -> Applicability {
        self.when.unwrap_or(default)
    }
}

impl<T: Serialize> Serialize for RuleDef<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = 1 + usize::from(self.when.is_some()) + usize::from(self.param.is_some());
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        if let Some(when) = &self.when {
            seq.serialize_element(when)?;
        }
        if let Some(param) = &self.param {
            seq.serialize_element(param)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RuleDef<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RuleDefVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for RuleDefVisitor<T> {
            type Value = RuleDef<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str(
                    "a rule tuple: [severity], [severity, applicability] \
                     or [severity, applicability, value]",
                )
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let severity = seq
                    .next_element::<Severity>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let when = seq.next_element::<Applicability>()?;
                let param = if when.is_some() {
                    seq.next_element::<T>()?
                } else {
                    None
                };
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom("rule tuples take at most three elements"));
                }
                Ok(RuleDef {
                    severity,
                    when,
                    param,
                })
            }
        }

        deserializer.deserialize_seq(RuleDefVisitor(PhantomData))
    }
}

/// Rule strictness.
///
/// The artifact may spell it numerically (`0`, `1`, `2`) like commitlint,
/// or symbolically (`"off"`, `"warning"`, `"error"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Rule disabled; its check never runs.
    Off,
    /// Reported but never fails the run on its own.
    Warning,
    /// Fails the run.
    Error,
}

impl Severity {
    /// Get the string representation of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Whether a violation at this severity fails the run.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SeverityVisitor;

        impl Visitor<'_> for SeverityVisitor {
            type Value = Severity;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a severity: 0-2 or \"off\", \"warning\", \"error\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Severity, E> {
                match value {
                    0 => Ok(Severity::Off),
                    1 => Ok(Severity::Warning),
                    2 => Ok(Severity::Error),
                    other => Err(E::custom(format!(
                        "severity must be 0, 1 or 2, got {}",
                        other
                    ))),
                }
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Severity, E> {
                u64::try_from(value)
                    .map_err(|_| E::custom(format!("severity must be 0, 1 or 2, got {}", value)))
                    .and_then(|value| self.visit_u64(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Severity, E> {
                match value {
                    "off" => Ok(Severity::Off),
                    "warning" => Ok(Severity::Warning),
                    "error" => Ok(Severity::Error),
                    other => Err(E::custom(format!(
                        "severity must be \"off\", \"warning\" or \"error\", got {:?}",
                        other
                    ))),
                }
            }
        }

        deserializer.deserialize_any(SeverityVisitor)
    }
}

/// Whether a rule's predicate must always hold or must never hold.
///
/// `never` negates the predicate; it does not disable the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

/// Subject case styles.
///
/// Matched by capitalization patterns over ASCII letters, not a full
/// Unicode title-casing model. That is all the disallow-list needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStyle {
    /// First letter capitalized, everything after it lowercase.
    SentenceCase,
    /// Every word starts with a capital letter.
    StartCase,
    /// One capitalized word with no separators.
    PascalCase,
    /// No lowercase letters at all.
    UpperCase,
}

impl CaseStyle {
    /// Get the string representation of the case style.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::SentenceCase => "sentence-case",
            CaseStyle::StartCase => "start-case",
            CaseStyle::PascalCase => "pascal-case",
            CaseStyle::UpperCase => "upper-case",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_match_artifact() {
        let rules = RuleSet::default();
        assert_eq!(rules.type_enum.severity, Severity::Error);
        assert_eq!(rules.type_enum.param.as_ref().map(Vec::len), Some(11));
        assert_eq!(rules.header_max_length.param, Some(72));
        assert!(rules.scope_empty.is_off());
        assert_eq!(rules.scope_enum.severity, Severity::Warning);
        assert_eq!(rules.body_leading_blank.severity, Severity::Warning);
    }

    #[test]
    fn test_severity_from_numbers() {
        let rules: RuleSet = toml::from_str("subject-empty = [0]").unwrap();
        assert!(rules.subject_empty.is_off());

        let rules: RuleSet = toml::from_str("subject-empty = [1, \"never\"]").unwrap();
        assert_eq!(rules.subject_empty.severity, Severity::Warning);

        let rules: RuleSet = toml::from_str("subject-empty = [2, \"never\"]").unwrap();
        assert_eq!(rules.subject_empty.severity, Severity::Error);
    }

    #[test]
    fn test_severity_symbolic() {
        let rules: RuleSet = toml::from_str("subject-empty = [\"error\", \"never\"]").unwrap();
        assert_eq!(rules.subject_empty.severity, Severity::Error);
        assert_eq!(rules.subject_empty.when, Some(Applicability::Never));
    }

    #[test]
    fn test_severity_out_of_range() {
        assert!(toml::from_str::<RuleSet>("subject-empty = [3]").is_err());
        assert!(toml::from_str::<RuleSet>("subject-empty = [-1]").is_err());
        assert!(toml::from_str::<RuleSet>("subject-empty = [\"loud\"]").is_err());
    }

    #[test]
    fn test_rule_tuple_forms() {
        let rule: RuleDef<Vec<String>> = serde_json::from_str("[2]").unwrap();
        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.when, None);
        assert_eq!(rule.param, None);

        let rule: RuleDef<Vec<String>> = serde_json::from_str("[2, \"always\"]").unwrap();
        assert_eq!(rule.when, Some(Applicability::Always));
        assert_eq!(rule.param, None);

        let rule: RuleDef<Vec<String>> =
            serde_json::from_str("[2, \"always\", [\"feat\", \"fix\"]]").unwrap();
        assert_eq!(rule.param.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_rule_tuple_too_long() {
        let result: Result<RuleDef<usize>, _> = serde_json::from_str("[2, \"always\", 72, 99]");
        assert!(result.is_err());
    }

    #[test]
    fn test_rule_tuple_bad_applicability() {
        let result: Result<RuleDef<usize>, _> = serde_json::from_str("[2, \"sometimes\", 72]");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_rule_names_ignored() {
        let rules: RuleSet = toml::from_str(
            "header-max-length = [2, \"always\", 50]\nbody-max-line-length = [2, \"always\", 100]",
        )
        .unwrap();
        assert_eq!(rules.header_max_length.param, Some(50));
    }

    #[test]
    fn test_partial_rules_keep_defaults() {
        let rules: RuleSet = toml::from_str("header-max-length = [2, \"always\", 100]").unwrap();
        assert_eq!(rules.header_max_length.param, Some(100));
        assert_eq!(rules.subject_full_stop.param, Some('.'));
        assert_eq!(rules.type_enum.param.as_ref().map(Vec::len), Some(11));
    }

    #[test]
    fn test_config_round_trip() {
        let config = Config::default();
        let rendered = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_case_style_names() {
        assert_eq!(CaseStyle::SentenceCase.as_str(), "sentence-case");
        assert_eq!(CaseStyle::PascalCase.to_string(), "pascal-case");
        let styles: Vec<CaseStyle> =
            serde_json::from_str("[\"sentence-case\", \"upper-case\"]").unwrap();
        assert_eq!(styles, vec![CaseStyle::SentenceCase, CaseStyle::UpperCase]);
    }
}
