// SPDX-License-Identifier: MIT

//! Hook manager for installing and managing git hooks.

use crate::error::{HookError, RepolintError, Result};
use crate::git::Repository;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_MARKER};

/// Installation state of a hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// Installed by repolint.
    Installed,
    /// A hook exists but was not installed by repolint.
    Foreign,
    /// No hook present.
    Missing,
}

/// Manager for git hooks.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = Repository::open_current()?;
        Self::with_hooks_dir(repo.hooks_dir())
    }

    /// Create a hook manager over an explicit hooks directory.
    pub fn with_hooks_dir(hooks_dir: PathBuf) -> Result<Self> {
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                RepolintError::Hook(HookError::InstallFailed {
                    hook: "all".to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        Ok(Self { hooks_dir })
    }

    /// Install a specific hook.
    pub fn install_hook(&self, hook_name: &str, force: bool) -> Result<()> {
        let template = hook_name.parse::<HookTemplate>().ok().ok_or_else(|| {
            RepolintError::Hook(HookError::NotFound {
                hook: hook_name.to_string(),
            })
        })?;

        self.install_template(&template, force)
    }

    /// Install all hooks.
    pub fn install_all(&self, force: bool) -> Result<()> {
        for template in HookTemplate::all() {
            self.install_template(template, force)?;
        }
        Ok(())
    }

    /// Install a hook from a template.
    fn install_template(&self, template: &HookTemplate, force: bool) -> Result<()> {
        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));

        if hook_path.exists() && !self.is_managed_hook(&hook_path)? {
            if !force {
                return Err(RepolintError::Hook(HookError::AlreadyExists {
                    hook: template.filename().to_string(),
                }));
            }

            // Keep the foreign hook around so uninstall can restore it.
            fs::rename(&hook_path, &backup_path).map_err(|e| {
                RepolintError::Hook(HookError::InstallFailed {
                    hook: template.filename().to_string(),
                    message: format!("Failed to backup existing hook: {}", e),
                })
            })?;
        }

        let script = template.generate();
        fs::write(&hook_path, &script).map_err(|e| {
            RepolintError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message: format!("Failed to write hook: {}", e),
            })
        })?;

        let mut perms = fs::metadata(&hook_path)
            .map_err(|e| {
                RepolintError::Hook(HookError::InstallFailed {
                    hook: template.filename().to_string(),
                    message: format!("Failed to get permissions: {}", e),
                })
            })?
            .permissions();

        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms).map_err(|e| {
            RepolintError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message: format!("Failed to set permissions: {}", e),
            })
        })?;

        tracing::debug!("Installed hook: {}", template.filename());
        Ok(())
    }

    /// Uninstall a specific hook, restoring any backup.
    pub fn uninstall_hook(&self, hook_name: &str) -> Result<()> {
        let template = hook_name.parse::<HookTemplate>().ok().ok_or_else(|| {
            RepolintError::Hook(HookError::NotFound {
                hook: hook_name.to_string(),
            })
        })?;

        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));

        if !hook_path.exists() {
            return Ok(());
        }

        if !self.is_managed_hook(&hook_path)? {
            return Err(RepolintError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: "Hook was not installed by repolint".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            RepolintError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).ok();
        }

        Ok(())
    }

    /// Uninstall all hooks.
    pub fn uninstall_all(&self) -> Result<()> {
        for template in HookTemplate::all() {
            self.uninstall_hook(template.filename())?;
        }
        Ok(())
    }

    /// Get the status of every installable hook.
    pub fn status(&self) -> Vec<(&'static str, HookStatus)> {
        HookTemplate::all()
            .iter()
            .map(|template| {
                let path = self.hooks_dir.join(template.filename());
                let status = if !path.exists() {
                    HookStatus::Missing
                } else if self.is_managed_hook(&path).unwrap_or(false) {
                    HookStatus::Installed
                } else {
                    HookStatus::Foreign
                };
                (template.filename(), status)
            })
            .collect()
    }

    /// Check whether a hook script was installed by repolint.
    fn is_managed_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path).map_err(RepolintError::Io)?;
        Ok(content.contains(HOOK_MARKER))
    }
}
