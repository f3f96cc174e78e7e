// SPDX-License-Identifier: MIT

//! Pre-commit manifest schema.
//!
//! Models the `.pre-commit-config.yaml` contract: a top-level `repos` key
//! holding an ordered sequence of hook sources, each a repository URI plus
//! pinned revision plus hook invocations. Keys outside the modeled contract
//! (`ci:`, `default_language_version:`, per-hook `files:`/`exclude:`) are
//! preserved so real-world manifests load unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel repository references that carry no revision.
pub const SENTINEL_REPOS: &[&str] = &["local", "meta"];

/// The full pre-commit manifest.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HookSuite {
    /// Ordered hook sources.
    #[serde(default)]
    pub repos: Vec<HookSource>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// One hook source: a repository at a pinned revision.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HookSource {
    /// Repository reference: a URI, or the `local` / `meta` sentinel.
    pub repo: String,

    /// Pinned revision (tag or commit). Absent for sentinel repos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,

    /// Ordered hook invocations.
    #[serde(default)]
    pub hooks: Vec<HookInvocation>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl HookSource {
    /// Whether this source is one of the `local` / `meta` sentinels.
    pub fn is_sentinel(&self) -> bool {
        SENTINEL_REPOS.contains(&self.repo.as_str())
    }
}

/// A single hook invocation within a source.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HookInvocation {
    /// Hook id, as defined by the source repository's hook manifest.
    pub id: String,

    /// Arguments passed to the hook.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let yaml = r#"
repos:
  - repo: https://github.com/psf/black
    rev: 24.2.0
    hooks:
      - id: black
"#;
        let suite: HookSuite = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(suite.repos.len(), 1);
        assert_eq!(suite.repos[0].repo, "https://github.com/psf/black");
        assert_eq!(suite.repos[0].rev.as_deref(), Some("24.2.0"));
        assert_eq!(suite.repos[0].hooks[0].id, "black");
        assert!(suite.repos[0].hooks[0].args.is_empty());
    }

    #[test]
    fn test_parse_hook_args_preserve_order() {
        let yaml = r#"
repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.5.0
    hooks:
      - id: mixed-line-ending
        args: [--fix=lf, --quiet]
"#;
        let suite: HookSuite = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            suite.repos[0].hooks[0].args,
            vec!["--fix=lf".to_string(), "--quiet".to_string()]
        );
    }

    #[test]
    fn test_parse_tolerates_unknown_keys() {
        let yaml = r#"
ci:
  autofix_prs: false
repos:
  - repo: https://github.com/PyCQA/flake8
    rev: 7.0.0
    hooks:
      - id: flake8
        files: ^src/
"#;
        let suite: HookSuite = serde_yaml::from_str(yaml).unwrap();
        assert!(suite.extra.contains_key("ci"));
        assert!(suite.repos[0].hooks[0].extra.contains_key("files"));
    }

    #[test]
    fn test_sentinel_detection() {
        let source = HookSource {
            repo: "local".to_string(),
            ..Default::default()
        };
        assert!(source.is_sentinel());

        let source = HookSource {
            repo: "https://github.com/psf/black".to_string(),
            ..Default::default()
        };
        assert!(!source.is_sentinel());
    }

    #[test]
    fn test_roundtrip_keeps_repo_order() {
        let yaml = r#"
repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.5.0
    hooks:
      - id: trailing-whitespace
  - repo: https://github.com/psf/black
    rev: 24.2.0
    hooks:
      - id: black
"#;
        let suite: HookSuite = serde_yaml::from_str(yaml).unwrap();
        let emitted = serde_yaml::to_string(&suite).unwrap();
        let reparsed: HookSuite = serde_yaml::from_str(&emitted).unwrap();
        let repos: Vec<&str> = reparsed.repos.iter().map(|r| r.repo.as_str()).collect();
        assert_eq!(
            repos,
            vec![
                "https://github.com/pre-commit/pre-commit-hooks",
                "https://github.com/psf/black"
            ]
        );
    }
}
