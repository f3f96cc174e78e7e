// SPDX-License-Identifier: MIT

//! Lint engine module for commit message validation.
//!
//! Applies the configured rule set to parsed commit messages and reports
//! severity-tagged issues.

mod builtin;
mod engine;
mod result;

pub use builtin::apply_rules;
pub use engine::LintEngine;
pub use result::{ValidationIssue, ValidationResult};
