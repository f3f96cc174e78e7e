// SPDX-License-Identifier: MIT

//! Hook script templates.

use std::str::FromStr;

/// Marker line identifying scripts installed by repolint.
pub const HOOK_MARKER: &str = "# repolint-managed hook";

/// Git hooks repolint can install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    /// Validates the commit message against the rule set.
    CommitMsg,
}

impl HookTemplate {
    /// All installable hooks.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    /// The hook's file name under `.git/hooks`.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    /// Generate the hook script.
    pub fn generate(&self) -> String {
        match self {
            HookTemplate::CommitMsg => format!(
                "#!/bin/sh\n{}\n\nexec repolint check --message-file \"$1\"\n",
                HOOK_MARKER
            ),
        }
    }
}

impl FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commit-msg" => Ok(HookTemplate::CommitMsg),
            _ => Err(()),
        }
    }
}
