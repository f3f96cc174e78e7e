// SPDX-License-Identifier: MIT

//! Commit message structure and header parsing.

use crate::error::{LintError, RepolintError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for the conventional commit header: `type(scope)!: subject`.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[A-Za-z][A-Za-z0-9]*)(?:\((?P<scope>[^()]+)\))?(?P<breaking>!)?: (?P<subject>.+)$"
    ).unwrap();
}

/// A parsed commit message.
///
/// Type and scope are open strings at this layer; vocabulary membership is
/// the lint engine's job, since the permitted tokens are policy data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// Type token (API, BUG, ...).
    pub commit_type: String,
    /// Optional scope token.
    pub scope: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Optional body (everything after the first blank line).
    pub body: Option<String>,
    /// Whether the header carries the breaking-change marker.
    pub is_breaking: bool,
}

impl CommitMessage {
    /// Create a new commit message.
    pub fn new(commit_type: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            scope: None,
            subject: subject.into(),
            body: None,
            is_breaking: false,
        }
    }

    /// Set the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Set the body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        if !body.is_empty() {
            self.body = Some(body);
        }
        self
    }

    /// Parse a commit message.
    ///
    /// Comment lines (as in `COMMIT_EDITMSG`) are stripped before parsing.
    pub fn parse(message: &str) -> Result<Self> {
        let stripped = strip_comments(message);
        let stripped = stripped.trim();

        if stripped.is_empty() {
            return Err(RepolintError::Lint(LintError::EmptyMessage));
        }

        let mut lines = stripped.lines();
        let header = lines.next().unwrap_or("");

        let captures = HEADER_REGEX.captures(header).ok_or_else(|| {
            RepolintError::Lint(LintError::InvalidHeader {
                header: header.to_string(),
            })
        })?;

        let commit_type = captures["type"].to_string();
        let scope = captures.name("scope").map(|m| m.as_str().to_string());
        let subject = captures["subject"].to_string();
        let is_breaking = captures.name("breaking").is_some();

        // Body starts after the first blank line following the header.
        let rest: Vec<&str> = lines.collect();
        let body = match rest.split_first() {
            Some((blank, body_lines)) if blank.trim().is_empty() => {
                let body = body_lines.join("\n").trim().to_string();
                (!body.is_empty()).then_some(body)
            }
            _ => None,
        };

        Ok(Self {
            commit_type,
            scope,
            subject,
            body,
            is_breaking,
        })
    }

    /// Reconstruct the header line.
    pub fn header(&self) -> String {
        let mut result = String::new();
        result.push_str(&self.commit_type);

        if let Some(ref scope) = self.scope {
            result.push('(');
            result.push_str(scope);
            result.push(')');
        }

        if self.is_breaking {
            result.push('!');
        }

        result.push_str(": ");
        result.push_str(&self.subject);

        result
    }

    /// Header length in characters (Unicode scalar values).
    pub fn header_len(&self) -> usize {
        self.header().chars().count()
    }

    /// Format the full message.
    pub fn format(&self) -> String {
        let mut result = self.header();
        if let Some(ref body) = self.body {
            result.push_str("\n\n");
            result.push_str(body);
        }
        result
    }
}

/// Remove git comment lines from a message.
fn strip_comments(message: &str) -> String {
    message
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_scope() {
        let msg = CommitMessage::parse("ENH(mapping): add HEALPix map resampling").unwrap();
        assert_eq!(msg.commit_type, "ENH");
        assert_eq!(msg.scope, Some("mapping".to_string()));
        assert_eq!(msg.subject, "add HEALPix map resampling");
        assert!(!msg.is_breaking);
    }

    #[test]
    fn test_parse_without_scope() {
        let msg = CommitMessage::parse("DOC: update installation notes").unwrap();
        assert_eq!(msg.commit_type, "DOC");
        assert!(msg.scope.is_none());
    }

    #[test]
    fn test_parse_breaking() {
        let msg = CommitMessage::parse("API(core)!: rename field accessors").unwrap();
        assert!(msg.is_breaking);
        assert_eq!(msg.scope, Some("core".to_string()));
    }

    #[test]
    fn test_parse_with_body() {
        let msg =
            CommitMessage::parse("BUG(twopoint): fix bin edges\n\nOff-by-one in the last bin.")
                .unwrap();
        assert_eq!(msg.body, Some("Off-by-one in the last bin.".to_string()));
    }

    #[test]
    fn test_parse_strips_comments() {
        let msg = CommitMessage::parse(
            "TST(io): add fits reader test\n# Please enter the commit message\n# Lines starting with '#' will be ignored",
        )
        .unwrap();
        assert_eq!(msg.subject, "add fits reader test");
        assert!(msg.body.is_none());
    }

    #[test]
    fn test_parse_empty_message() {
        let result = CommitMessage::parse("# only comments\n#\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_missing_separator() {
        let result = CommitMessage::parse("no conventional header here");
        assert!(matches!(
            result,
            Err(RepolintError::Lint(LintError::InvalidHeader { .. }))
        ));
    }

    #[test]
    fn test_parse_empty_scope_rejected() {
        let result = CommitMessage::parse("ENH(): empty scope");
        assert!(result.is_err());
    }

    #[test]
    fn test_header_roundtrip() {
        let msg = CommitMessage::new("MNT", "bump pre-commit hook revisions").with_scope("cli");
        assert_eq!(msg.header(), "MNT(cli): bump pre-commit hook revisions");
        let parsed = CommitMessage::parse(&msg.header()).unwrap();
        assert_eq!(parsed, msg);
    }

    #[test]
    fn test_header_len_counts_chars() {
        let msg = CommitMessage::new("DOC", "añadir documentación");
        assert_eq!(msg.header_len(), msg.header().chars().count());
        assert!(msg.header_len() < msg.header().len());
    }

    #[test]
    fn test_format_with_body() {
        let msg = CommitMessage::new("ENH", "add mapper cache").with_body("Details.");
        assert_eq!(msg.format(), "ENH: add mapper cache\n\nDetails.");
    }
}
