// SPDX-License-Identifier: MIT

//! Lint engine for commit messages.

use crate::commit::CommitMessage;
use crate::config::{LintConfig, RuleSet};
use crate::error::{LintError, RepolintError, Result};
use crate::git::Repository;

use super::builtin::apply_rules;
use super::result::{ValidationIssue, ValidationResult};

/// Engine applying a rule set to commit messages.
#[derive(Debug, Clone)]
pub struct LintEngine {
    rules: RuleSet,
}

impl LintEngine {
    /// Create a new engine from a configuration.
    pub fn new(config: LintConfig) -> Self {
        Self {
            rules: config.rules,
        }
    }

    /// Access the active rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Lint a parsed commit message.
    pub fn lint(&self, message: &CommitMessage) -> ValidationResult {
        let mut result = ValidationResult::new(message.header());
        for issue in apply_rules(message, &self.rules) {
            result.push(issue);
        }
        result
    }

    /// Lint a raw commit message string.
    ///
    /// A message that fails to parse produces an error issue rather than a
    /// hard failure, so malformed headers are reported in the same shape as
    /// rule violations.
    pub fn lint_message(&self, message: &str) -> ValidationResult {
        match CommitMessage::parse(message) {
            Ok(parsed) => self.lint(&parsed),
            Err(RepolintError::Lint(LintError::EmptyMessage)) => {
                let mut result = ValidationResult::new("");
                result.push(
                    ValidationIssue::from_severity(
                        crate::config::Severity::Error,
                        "header-format",
                        "Commit message is empty",
                    )
                    .at_line(1),
                );
                result
            }
            Err(_) => {
                let header = message.lines().next().unwrap_or("").to_string();
                let mut result = ValidationResult::new(header.clone());
                result.push(
                    ValidationIssue::from_severity(
                        crate::config::Severity::Error,
                        "header-format",
                        format!("Header does not match 'type(scope): subject': {}", header),
                    )
                    .with_suggestion("Format the header as TYPE(scope): subject")
                    .at_line(1),
                );
                result
            }
        }
    }

    /// Lint a specific commit by reference.
    pub fn check_commit(&self, repo: &Repository, reference: &str) -> Result<ValidationResult> {
        let (oid, message) = repo.commit_message(reference)?;
        let mut result = self.lint_message(&message);
        result.commit_sha = Some(oid);
        Ok(result)
    }

    /// Lint a range of commits (`a..b`).
    pub fn check_range(&self, repo: &Repository, range: &str) -> Result<Vec<ValidationResult>> {
        let commits = repo.commits_in_range(range)?;
        let mut results = Vec::new();

        for (oid, message) in commits {
            let mut result = self.lint_message(&message);
            result.commit_sha = Some(oid);
            results.push(result);
        }

        Ok(results)
    }
}
