// SPDX-License-Identifier: MIT

//! Built-in lint checks, one per rule name.
//!
//! Each check honors its rule's severity (off rules are skipped entirely)
//! and applicability (`never` inverts the condition).

use crate::commit::CommitMessage;
use crate::config::{Applicability, Rule, RuleSet};

use super::result::ValidationIssue;

/// Apply every configured rule to a commit message.
pub fn apply_rules(message: &CommitMessage, rules: &RuleSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if let Some(issue) = check_header_max_length(message, rules.header_max_length.as_ref()) {
        issues.push(issue);
    }
    if let Some(issue) = check_type_enum(message, rules.type_enum.as_ref()) {
        issues.push(issue);
    }
    if let Some(issue) = check_scope_enum(message, rules.scope_enum.as_ref()) {
        issues.push(issue);
    }
    if let Some(issue) = check_case(
        "type-case",
        &message.commit_type,
        rules.type_case.as_ref(),
    ) {
        issues.push(issue);
    }
    if let Some(issue) = check_case_opt("scope-case", message.scope.as_deref(), rules.scope_case.as_ref())
    {
        issues.push(issue);
    }
    if let Some(issue) = check_case("subject-case", &message.subject, rules.subject_case.as_ref()) {
        issues.push(issue);
    }

    issues
}

/// Whether a satisfied/violated condition is a finding under the rule's
/// applicability. `always` flags violations; `never` flags satisfactions.
fn is_finding(rule: &Rule, condition_holds: bool) -> bool {
    match rule.applicability {
        Applicability::Always => !condition_holds,
        Applicability::Never => condition_holds,
    }
}

/// Check the header length bound.
fn check_header_max_length(
    message: &CommitMessage,
    rule: Option<&Rule>,
) -> Option<ValidationIssue> {
    let rule = rule.filter(|r| r.is_enabled())?;
    let max = rule.limit()?;
    let len = message.header_len();

    if is_finding(rule, len <= max) {
        Some(
            ValidationIssue::from_severity(
                rule.severity,
                "header-max-length",
                format!("Header is too long: {} characters (max: {})", len, max),
            )
            .with_suggestion(format!("Shorten the header to {} characters or less", max))
            .at_line(1),
        )
    } else {
        None
    }
}

/// Check type token membership. Case-sensitive.
fn check_type_enum(message: &CommitMessage, rule: Option<&Rule>) -> Option<ValidationIssue> {
    let rule = rule.filter(|r| r.is_enabled())?;
    let allowed = rule.enum_values()?;
    // An empty enum list disables the membership check.
    if allowed.is_empty() {
        return None;
    }

    let member = allowed.iter().any(|t| t == &message.commit_type);
    if is_finding(rule, member) {
        Some(
            ValidationIssue::from_severity(
                rule.severity,
                "type-enum",
                format!("Type '{}' is not permitted", message.commit_type),
            )
            .with_suggestion(format!("Use one of: {}", allowed.join(", ")))
            .at_line(1),
        )
    } else {
        None
    }
}

/// Check scope token membership. Only applies when a scope is present.
fn check_scope_enum(message: &CommitMessage, rule: Option<&Rule>) -> Option<ValidationIssue> {
    let rule = rule.filter(|r| r.is_enabled())?;
    let allowed = rule.enum_values()?;
    if allowed.is_empty() {
        return None;
    }
    let scope = message.scope.as_ref()?;

    let member = allowed.iter().any(|s| s == scope);
    if is_finding(rule, member) {
        Some(
            ValidationIssue::from_severity(
                rule.severity,
                "scope-enum",
                format!("Scope '{}' is not permitted", scope),
            )
            .with_suggestion(format!("Use one of: {}", allowed.join(", ")))
            .at_line(1),
        )
    } else {
        None
    }
}

/// Check a token against a case-style rule.
fn check_case(code: &str, token: &str, rule: Option<&Rule>) -> Option<ValidationIssue> {
    let rule = rule.filter(|r| r.is_enabled())?;
    let style = rule.case_style()?;

    let matches = match style {
        "lower-case" | "lowercase" => !token.chars().any(|c| c.is_uppercase()),
        "upper-case" | "uppercase" => !token.chars().any(|c| c.is_lowercase()),
        "sentence-case" => token
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(true),
        other => {
            tracing::debug!("Unsupported case style '{}', skipping {}", other, code);
            return None;
        }
    };

    if is_finding(rule, matches) {
        Some(
            ValidationIssue::from_severity(
                rule.severity,
                code,
                format!("'{}' does not match case style '{}'", token, style),
            )
            .at_line(1),
        )
    } else {
        None
    }
}

/// Case check for an optional token (scope).
fn check_case_opt(code: &str, token: Option<&str>, rule: Option<&Rule>) -> Option<ValidationIssue> {
    check_case(code, token?, rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_rules, RuleValue, Severity};

    fn message(commit_type: &str, scope: Option<&str>, subject: &str) -> CommitMessage {
        let mut msg = CommitMessage::new(commit_type, subject);
        if let Some(scope) = scope {
            msg = msg.with_scope(scope);
        }
        msg
    }

    #[test]
    fn test_header_at_bound_accepted() {
        let rules = default_rules();
        // "ENH(core): " is 11 characters; pad the subject to land on 65 exactly.
        let msg = message("ENH", Some("core"), &"a".repeat(54));
        assert_eq!(msg.header_len(), 65);
        assert!(apply_rules(&msg, &rules).is_empty());
    }

    #[test]
    fn test_header_over_bound_rejected() {
        let rules = default_rules();
        let msg = message("ENH", Some("core"), &"a".repeat(55));
        assert_eq!(msg.header_len(), 66);
        let issues = apply_rules(&msg, &rules);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "header-max-length");
        assert!(issues[0].is_error);
    }

    #[test]
    fn test_unknown_scope_rejected() {
        let rules = default_rules();
        let msg = message("BUG", Some("unknown"), "fix it");
        let issues = apply_rules(&msg, &rules);
        assert!(issues.iter().any(|i| i.code == "scope-enum"));
    }

    #[test]
    fn test_known_scope_accepted() {
        let rules = default_rules();
        let msg = message("BUG", Some("core"), "fix it");
        assert!(apply_rules(&msg, &rules).is_empty());
    }

    #[test]
    fn test_missing_scope_accepted() {
        // scope-enum only constrains a scope that is present.
        let rules = default_rules();
        let msg = message("DOC", None, "update readme");
        assert!(apply_rules(&msg, &rules).is_empty());
    }

    #[test]
    fn test_type_membership_case_sensitive() {
        let rules = default_rules();
        let msg = message("enh", Some("core"), "lowercase type");
        let issues = apply_rules(&msg, &rules);
        assert!(issues.iter().any(|i| i.code == "type-enum"));
    }

    #[test]
    fn test_every_default_type_accepted() {
        let rules = default_rules();
        for t in crate::config::default::TYPES {
            let msg = message(t, Some("io"), "subject");
            assert!(
                apply_rules(&msg, &rules).is_empty(),
                "type {} should be accepted",
                t
            );
        }
    }

    #[test]
    fn test_disabled_rule_skipped() {
        let mut rules = default_rules();
        // subject-case is off by default even with a value present.
        rules.subject_case = Some(Rule {
            severity: Severity::Off,
            applicability: Applicability::Always,
            value: Some(RuleValue::Case("lower-case".to_string())),
        });
        let msg = message("ENH", None, "Uppercase Subject");
        assert!(apply_rules(&msg, &rules).is_empty());
    }

    #[test]
    fn test_warning_severity_not_error() {
        let mut rules = default_rules();
        rules.scope_enum = Some(Rule {
            severity: Severity::Warning,
            applicability: Applicability::Always,
            value: Some(RuleValue::Enum(vec!["core".to_string()])),
        });
        let msg = message("ENH", Some("weird"), "subject");
        let issues = apply_rules(&msg, &rules);
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error);
    }

    #[test]
    fn test_never_applicability_inverts() {
        let mut rules = default_rules();
        rules.type_enum = Some(Rule {
            severity: Severity::Error,
            applicability: Applicability::Never,
            value: Some(RuleValue::Enum(vec!["WIP".to_string()])),
        });
        // WIP is in the forbidden set, so it is now a finding.
        let msg = message("WIP", Some("core"), "in progress");
        let issues = apply_rules(&msg, &rules);
        assert!(issues.iter().any(|i| i.code == "type-enum"));

        let msg = message("ENH", Some("core"), "fine");
        assert!(apply_rules(&msg, &rules).is_empty());
    }

    #[test]
    fn test_empty_enum_disables_membership() {
        let mut rules = default_rules();
        rules.scope_enum = Some(Rule::error(RuleValue::Enum(Vec::new())));
        let msg = message("ENH", Some("anything"), "subject");
        assert!(apply_rules(&msg, &rules).is_empty());
    }

    #[test]
    fn test_case_rule_enabled() {
        let mut rules = default_rules();
        rules.subject_case = Some(Rule {
            severity: Severity::Warning,
            applicability: Applicability::Always,
            value: Some(RuleValue::Case("lower-case".to_string())),
        });
        let msg = message("ENH", Some("core"), "Capitalized subject");
        let issues = apply_rules(&msg, &rules);
        assert!(issues.iter().any(|i| i.code == "subject-case"));
    }
}
