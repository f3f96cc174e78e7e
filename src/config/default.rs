// SPDX-License-Identifier: MIT

//! Default policy values.
//!
//! The defaults reproduce the parent project's contribution policy: a 65
//! character header bound, a closed scope vocabulary naming its subsystems,
//! and an upper-case type vocabulary in the numpy-style convention.

use super::schema::{LintConfig, Rule, RuleSet, RuleValue};

/// Permitted scope tokens, one per subsystem.
pub const SCOPES: &[&str] = &[
    "catalog", "cli", "core", "fields", "healpy", "io", "mapper", "mapping", "progress",
    "twopoint",
];

/// Permitted type tokens.
pub const TYPES: &[&str] = &[
    "API", "BUG", "DEP", "DEV", "DOC", "ENH", "MNT", "REV", "STY", "TST", "TYP", "REL",
];

/// Maximum commit header length in characters.
pub const HEADER_MAX_LENGTH: usize = 65;

fn string_list(tokens: &[&str]) -> RuleValue {
    RuleValue::Enum(tokens.iter().map(|s| s.to_string()).collect())
}

/// Get the default rule set.
pub fn default_rules() -> RuleSet {
    RuleSet {
        header_max_length: Some(Rule::error(RuleValue::Limit(HEADER_MAX_LENGTH))),
        subject_case: Some(Rule::off()),
        scope_enum: Some(Rule::error(string_list(SCOPES))),
        scope_case: Some(Rule::off()),
        type_enum: Some(Rule::error(string_list(TYPES))),
        type_case: Some(Rule::off()),
        extra: Default::default(),
    }
}

/// Get the default configuration.
pub fn default_config() -> LintConfig {
    LintConfig {
        rules: default_rules(),
    }
}

/// The default `.commitlintrc.json`, as written by `repolint init`.
pub fn example_lint_config() -> &'static str {
    r#"{
  "rules": {
    "header-max-length": [2, "always", 65],
    "subject-case": [0],
    "scope-enum": [
      2,
      "always",
      [
        "catalog",
        "cli",
        "core",
        "fields",
        "healpy",
        "io",
        "mapper",
        "mapping",
        "progress",
        "twopoint"
      ]
    ],
    "scope-case": [0],
    "type-enum": [
      2,
      "always",
      ["API", "BUG", "DEP", "DEV", "DOC", "ENH", "MNT", "REV", "STY", "TST", "TYP", "REL"]
    ],
    "type-case": [0]
  }
}
"#
}

/// The default `.pre-commit-config.yaml`, as written by `repolint init`.
pub fn example_manifest() -> &'static str {
    r#"repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.5.0
    hooks:
      - id: check-merge-conflict
      - id: check-yaml
      - id: end-of-file-fixer
      - id: mixed-line-ending
        args: [--fix=lf]
      - id: trailing-whitespace
  - repo: https://github.com/psf/black
    rev: 24.2.0
    hooks:
      - id: black
  - repo: https://github.com/PyCQA/isort
    rev: 5.13.2
    hooks:
      - id: isort
  - repo: https://github.com/PyCQA/flake8
    rev: 7.0.0
    hooks:
      - id: flake8
"#
}
