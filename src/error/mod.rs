// SPDX-License-Identifier: MIT

//! Error types for repolint.
//!
//! This module defines all error types used throughout the application,
//! with proper error categorization and context propagation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for repolint operations.
#[derive(Error, Debug)]
pub enum RepolintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Pre-commit manifest errors
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    // Commit message / lint errors
    #[error("Lint error: {0}")]
    Lint(#[from] LintError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Hook errors
    #[error("Hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors (commit-lint rule set).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid rule '{rule}': {message}")]
    InvalidRule { rule: String, message: String },
}

/// Pre-commit manifest errors.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Manifest file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("No pre-commit manifest found in this repository")]
    NotDiscovered,

    #[error("Failed to parse manifest: {message}")]
    ParseError { message: String },
}

/// Commit message parsing and lint errors.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Empty commit message")]
    EmptyMessage,

    #[error("Commit header does not match 'type(scope): subject': {header}")]
    InvalidHeader { header: String },

    #[error("Rule violation: {rule} - {message}")]
    RuleViolation { rule: String, message: String },

    #[error("Validation failed: {count} errors")]
    ChecksFailed { count: usize },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("Failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("Hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("Hook not found: {hook}")]
    NotFound { hook: String },

    #[error("Failed to remove hook '{hook}': {message}")]
    RemoveFailed { hook: String, message: String },
}

/// Result type alias for repolint operations.
pub type Result<T> = std::result::Result<T, RepolintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| RepolintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
