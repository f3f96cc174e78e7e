// SPDX-License-Identifier: MIT

//! Structural validation of the pre-commit manifest.
//!
//! These checks assert the data contract only. Resolving a pinned revision
//! against the remote, cloning hook repositories and executing hooks are the
//! external runner's job and involve no validation here.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::config::Severity;
use crate::lint::{ValidationIssue, ValidationResult};

use super::schema::{HookSource, HookSuite};

lazy_static! {
    /// Accepted repository URI shapes: a scheme'd URL or the scp-like
    /// `git@host:path` form.
    static ref REPO_URI_REGEX: Regex =
        Regex::new(r"^(?:(?:https?|ssh|git)://\S+|git@[^\s:]+:\S+)$").unwrap();
}

impl HookSuite {
    /// Validate the manifest, reporting one issue per violation.
    pub fn validate(&self, subject: impl Into<String>) -> ValidationResult {
        let mut result = ValidationResult::new(subject);

        if self.repos.is_empty() {
            result.push(ValidationIssue::from_severity(
                Severity::Warning,
                "repos-empty",
                "Manifest defines no hook sources",
            ));
            return result;
        }

        let mut seen_sources: HashSet<(String, Option<String>)> = HashSet::new();

        for (index, source) in self.repos.iter().enumerate() {
            validate_source(source, index, &mut result);

            let key = (source.repo.clone(), source.rev.clone());
            if !seen_sources.insert(key) {
                result.push(ValidationIssue::from_severity(
                    Severity::Warning,
                    "source-duplicate",
                    format!("Duplicate hook source '{}' (repos[{}])", source.repo, index),
                ));
            }
        }

        result
    }
}

fn validate_source(source: &HookSource, index: usize, result: &mut ValidationResult) {
    let location = format!("repos[{}]", index);

    if source.repo.trim().is_empty() {
        result.push(ValidationIssue::from_severity(
            Severity::Error,
            "repo-uri",
            format!("{}: repository reference is empty", location),
        ));
    } else if !source.is_sentinel() && !REPO_URI_REGEX.is_match(&source.repo) {
        result.push(
            ValidationIssue::from_severity(
                Severity::Error,
                "repo-uri",
                format!(
                    "{}: '{}' is not a valid repository URI",
                    location, source.repo
                ),
            )
            .with_suggestion("Use an https/ssh/git URL, or 'local' / 'meta'"),
        );
    }

    match (&source.rev, source.is_sentinel()) {
        // Sentinel repos must not be pinned; pre-commit rejects a rev there.
        (Some(_), true) => result.push(ValidationIssue::from_severity(
            Severity::Warning,
            "repo-rev",
            format!("{}: '{}' repos take no rev", location, source.repo),
        )),
        (Some(rev), false) if rev.trim().is_empty() => {
            result.push(ValidationIssue::from_severity(
                Severity::Error,
                "repo-rev",
                format!("{}: pinned revision is empty", location),
            ))
        }
        (None, false) => result.push(
            ValidationIssue::from_severity(
                Severity::Error,
                "repo-rev",
                format!("{}: missing pinned revision", location),
            )
            .with_suggestion("Pin a tag or commit hash for reproducible hook versions"),
        ),
        _ => {}
    }

    if source.hooks.is_empty() {
        result.push(ValidationIssue::from_severity(
            Severity::Error,
            "hooks-empty",
            format!("{}: source defines no hooks", location),
        ));
    }

    let mut seen_ids: HashSet<&str> = HashSet::new();
    for (hook_index, hook) in source.hooks.iter().enumerate() {
        if hook.id.trim().is_empty() {
            result.push(ValidationIssue::from_severity(
                Severity::Error,
                "hook-id",
                format!("{}.hooks[{}]: hook id is empty", location, hook_index),
            ));
            continue;
        }
        if !seen_ids.insert(hook.id.as_str()) {
            result.push(ValidationIssue::from_severity(
                Severity::Error,
                "hook-duplicate",
                format!(
                    "{}.hooks[{}]: duplicate hook id '{}'",
                    location, hook_index, hook.id
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::schema::HookInvocation;

    fn source(repo: &str, rev: Option<&str>, ids: &[&str]) -> HookSource {
        HookSource {
            repo: repo.to_string(),
            rev: rev.map(String::from),
            hooks: ids
                .iter()
                .map(|id| HookInvocation {
                    id: id.to_string(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn suite(repos: Vec<HookSource>) -> HookSuite {
        HookSuite {
            repos,
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_manifest_has_no_issues() {
        let suite = suite(vec![
            source(
                "https://github.com/pre-commit/pre-commit-hooks",
                Some("v4.5.0"),
                &["trailing-whitespace", "check-merge-conflict"],
            ),
            source("https://github.com/psf/black", Some("24.2.0"), &["black"]),
        ]);
        let result = suite.validate("test");
        assert!(result.is_valid());
        assert_eq!(result.issue_count(), 0);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let suite = suite(vec![source(
            "https://github.com/psf/black",
            Some("24.2.0"),
            &["black"],
        )]);
        let first = suite.validate("test");
        let second = suite.validate("test");
        assert_eq!(first.issue_count(), second.issue_count());
        assert_eq!(first.issue_count(), 0);
    }

    #[test]
    fn test_invalid_uri_rejected() {
        let suite = suite(vec![source("not a uri", Some("v1"), &["hook"])]);
        let result = suite.validate("test");
        assert!(result.errors.iter().any(|e| e.code == "repo-uri"));
    }

    #[test]
    fn test_scp_form_accepted() {
        let suite = suite(vec![source(
            "git@github.com:psf/black",
            Some("24.2.0"),
            &["black"],
        )]);
        assert!(suite.validate("test").is_valid());
    }

    #[test]
    fn test_missing_rev_rejected() {
        let suite = suite(vec![source("https://github.com/psf/black", None, &["black"])]);
        let result = suite.validate("test");
        assert!(result.errors.iter().any(|e| e.code == "repo-rev"));
    }

    #[test]
    fn test_empty_rev_rejected() {
        let suite = suite(vec![source(
            "https://github.com/psf/black",
            Some("  "),
            &["black"],
        )]);
        let result = suite.validate("test");
        assert!(result.errors.iter().any(|e| e.code == "repo-rev"));
    }

    #[test]
    fn test_sentinel_repo_needs_no_rev() {
        let suite = suite(vec![source("local", None, &["my-check"])]);
        assert!(suite.validate("test").is_valid());
    }

    #[test]
    fn test_sentinel_repo_with_rev_warns() {
        let suite = suite(vec![source("meta", Some("v1"), &["check-hooks-apply"])]);
        let result = suite.validate("test");
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.code == "repo-rev"));
    }

    #[test]
    fn test_empty_hook_id_rejected() {
        let suite = suite(vec![source(
            "https://github.com/psf/black",
            Some("24.2.0"),
            &[""],
        )]);
        let result = suite.validate("test");
        assert!(result.errors.iter().any(|e| e.code == "hook-id"));
    }

    #[test]
    fn test_duplicate_hook_id_rejected() {
        let suite = suite(vec![source(
            "https://github.com/psf/black",
            Some("24.2.0"),
            &["black", "black"],
        )]);
        let result = suite.validate("test");
        assert!(result.errors.iter().any(|e| e.code == "hook-duplicate"));
    }

    #[test]
    fn test_duplicate_source_warns() {
        let entry = source("https://github.com/psf/black", Some("24.2.0"), &["black"]);
        let suite = suite(vec![entry.clone(), entry]);
        let result = suite.validate("test");
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.code == "source-duplicate"));
    }

    #[test]
    fn test_source_without_hooks_rejected() {
        let suite = suite(vec![source(
            "https://github.com/psf/black",
            Some("24.2.0"),
            &[],
        )]);
        let result = suite.validate("test");
        assert!(result.errors.iter().any(|e| e.code == "hooks-empty"));
    }

    #[test]
    fn test_empty_manifest_warns() {
        let result = suite(Vec::new()).validate("test");
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.code == "repos-empty"));
    }
}
