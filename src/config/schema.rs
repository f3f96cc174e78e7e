// SPDX-License-Identifier: MIT

//! Commit-lint rule set schema.
//!
//! Models the commitlint-style configuration object: a top-level `rules`
//! mapping from rule name to a `[severity, applicability, value?]` tuple.

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Rule severity. Encoded on the wire as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Severity {
    /// 0 - rule is disabled.
    #[default]
    Off,
    /// 1 - violations are reported but do not fail the lint.
    Warning,
    /// 2 - violations fail the lint.
    Error,
}

impl Severity {
    /// Numeric wire encoding.
    pub fn as_u8(self) -> u8 {
        match self {
            Severity::Off => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = u8::deserialize(deserializer)?;
        match n {
            0 => Ok(Severity::Off),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(de::Error::custom(format!(
                "invalid severity {} (expected 0, 1 or 2)",
                other
            ))),
        }
    }
}

/// Whether a rule asserts its condition or its negation.
///
/// `Never` inverts the check, matching commitlint semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

/// The value slot of a rule tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// Numeric bound (e.g. header-max-length).
    Limit(usize),
    /// Case style name (e.g. "lower-case" for subject-case).
    Case(String),
    /// Closed token set (scope-enum, type-enum).
    Enum(Vec<String>),
}

/// A single lint rule: `(severity, applicability, value?)`.
///
/// On the wire this is a 1-, 2- or 3-element array; a bare `[0]` disables
/// the rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rule {
    pub severity: Severity,
    pub applicability: Applicability,
    pub value: Option<RuleValue>,
}

impl Rule {
    /// A disabled rule (`[0]`).
    pub fn off() -> Self {
        Self::default()
    }

    /// An error-severity rule with a value (`[2, "always", value]`).
    pub fn error(value: RuleValue) -> Self {
        Self {
            severity: Severity::Error,
            applicability: Applicability::Always,
            value: Some(value),
        }
    }

    /// Whether the rule participates in linting at all.
    pub fn is_enabled(&self) -> bool {
        self.severity != Severity::Off
    }

    /// Numeric bound, if the value slot holds one.
    pub fn limit(&self) -> Option<usize> {
        match self.value {
            Some(RuleValue::Limit(n)) => Some(n),
            _ => None,
        }
    }

    /// Token set, if the value slot holds one.
    pub fn enum_values(&self) -> Option<&[String]> {
        match &self.value {
            Some(RuleValue::Enum(values)) => Some(values),
            _ => None,
        }
    }

    /// Case style name, if the value slot holds one.
    pub fn case_style(&self) -> Option<&str> {
        match &self.value {
            Some(RuleValue::Case(style)) => Some(style),
            _ => None,
        }
    }
}

impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Disabled rules round-trip as the short form [0].
        if !self.is_enabled() && self.value.is_none() {
            let mut seq = serializer.serialize_seq(Some(1))?;
            seq.serialize_element(&self.severity)?;
            return seq.end();
        }

        let len = if self.value.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.severity)?;
        seq.serialize_element(&self.applicability)?;
        if let Some(ref value) = self.value {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleVisitor;

        impl<'de> Visitor<'de> for RuleVisitor {
            type Value = Rule;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a [severity, applicability, value?] array")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Rule, A::Error> {
                let severity: Severity = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let applicability: Option<Applicability> = seq.next_element()?;
                let value: Option<RuleValue> = if applicability.is_some() {
                    seq.next_element()?
                } else {
                    None
                };

                Ok(Rule {
                    severity,
                    applicability: applicability.unwrap_or_default(),
                    value,
                })
            }
        }

        deserializer.deserialize_seq(RuleVisitor)
    }
}

/// The named rules of the policy.
///
/// Rule names not modeled here are preserved in `extra` so a richer upstream
/// configuration still loads; the lint engine ignores them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleSet {
    #[serde(rename = "header-max-length", skip_serializing_if = "Option::is_none")]
    pub header_max_length: Option<Rule>,

    #[serde(rename = "subject-case", skip_serializing_if = "Option::is_none")]
    pub subject_case: Option<Rule>,

    #[serde(rename = "scope-enum", skip_serializing_if = "Option::is_none")]
    pub scope_enum: Option<Rule>,

    #[serde(rename = "scope-case", skip_serializing_if = "Option::is_none")]
    pub scope_case: Option<Rule>,

    #[serde(rename = "type-enum", skip_serializing_if = "Option::is_none")]
    pub type_enum: Option<Rule>,

    #[serde(rename = "type-case", skip_serializing_if = "Option::is_none")]
    pub type_case: Option<Rule>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// The full commit-lint configuration object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintConfig {
    pub rules: RuleSet,
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }
}
