// SPDX-License-Identifier: MIT

//! repolint - contribution-policy linter
//!
//! Enforces a repository's contribution policy from two declarative
//! artifacts: the pre-commit hook manifest (`.pre-commit-config.yaml`) and
//! the commit-lint rule set (`.commitlintrc.json`).
//!
//! # Features
//!
//! - **Commit linting**: conventional-commit header validation against a
//!   configurable rule set (header length, scope and type vocabularies)
//! - **Manifest validation**: structural checks over the pre-commit hook
//!   suite (URI shape, pinned revisions, hook ids)
//! - **Git hooks**: native commit-msg hook management without shell scripts
//!
//! # Example
//!
//! ```
//! use repolint::config::default_config;
//! use repolint::lint::LintEngine;
//!
//! let engine = LintEngine::new(default_config());
//!
//! let result = engine.lint_message("ENH(mapping): add map resampling");
//! assert!(result.is_valid());
//!
//! let result = engine.lint_message("feat(unknown): wrong vocabulary");
//! assert!(!result.is_valid());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod lint;
pub mod manifest;

// Re-exports for convenience
pub use config::LintConfig;
pub use error::{RepolintError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of repolint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
