// SPDX-License-Identifier: MIT

//! Validation result types.
//!
//! Shared by the commit-lint engine and the manifest validator.

use crate::cli::args::OutputFormat;
use crate::config::Severity;
use console::{style, Style};

/// A single validation issue.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Rule or check code for programmatic handling.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<String>,
    /// Whether this is an error (true) or warning (false).
    pub is_error: bool,
    /// Line number where the issue was found.
    pub line: Option<usize>,
}

impl ValidationIssue {
    /// Build an issue from a rule severity. `Severity::Off` never produces
    /// an issue, so only warn/error reach this.
    pub fn from_severity(
        severity: Severity,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            is_error: severity == Severity::Error,
            line: None,
        }
    }

    /// Attach a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach a line number.
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let prefix = if self.is_error {
            style("✗").red().bold()
        } else {
            style("⚠").yellow().bold()
        };

        let code_style = if self.is_error {
            Style::new().red()
        } else {
            Style::new().yellow()
        };

        let mut output = format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(&self.code),
            self.message
        );

        if let Some(ref suggestion) = self.suggestion {
            output.push_str(&format!(
                "\n  {} {}",
                style("→").dim(),
                style(suggestion).dim()
            ));
        }

        output
    }
}

/// Result of validating a commit message or a manifest.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// The validated input (commit header or manifest path).
    pub subject: String,
    /// Commit SHA if validating an existing commit.
    pub commit_sha: Option<String>,
    /// Validation errors.
    pub errors: Vec<ValidationIssue>,
    /// Validation warnings.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new, empty validation result.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            commit_sha: None,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// File an issue under errors or warnings according to its severity.
    pub fn push(&mut self, issue: ValidationIssue) {
        if issue.is_error {
            self.errors.push(issue);
        } else {
            self.warnings.push(issue);
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the total number of issues.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }

    /// Promote all warnings to errors (strict mode).
    pub fn promote_warnings(&mut self) {
        for mut warning in self.warnings.drain(..) {
            warning.is_error = true;
            self.errors.push(warning);
        }
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        if let Some(ref sha) = self.commit_sha {
            let short_sha = &sha[..7.min(sha.len())];
            let first_line = self.subject.lines().next().unwrap_or("");
            let status = if self.is_valid() {
                style("✓").green().bold()
            } else {
                style("✗").red().bold()
            };
            println!("{} {} {}", status, style(short_sha).cyan(), first_line);
        }

        for error in &self.errors {
            println!("  {}", error.format());
        }

        for warning in &self.warnings {
            println!("  {}", warning.format());
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let issue_json = |issue: &ValidationIssue| {
            serde_json::json!({
                "code": issue.code,
                "message": issue.message,
                "suggestion": issue.suggestion,
                "line": issue.line,
            })
        };

        let json = serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.commit_sha,
            "subject": self.subject,
            "errors": self.errors.iter().map(issue_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(issue_json).collect::<Vec<_>>(),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            if self.warnings.is_empty() {
                "Valid".to_string()
            } else {
                format!("Valid ({} warnings)", self.warnings.len())
            }
        } else {
            format!(
                "Invalid ({} errors, {} warnings)",
                self.errors.len(),
                self.warnings.len()
            )
        }
    }
}
