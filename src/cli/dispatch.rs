// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::LintConfig;
use crate::error::{LintError, RepolintError, Result};

use super::args::{CheckArgs, Cli, Commands, HooksAction, InitArgs, ManifestArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = if let Some(config_path) = &cli.config {
        LintConfig::load_from(config_path)?
    } else {
        LintConfig::load()?
    };

    match cli.effective_command() {
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Manifest(args) => run_manifest(&cli, args),
        Commands::Hooks(args) => run_hooks(args.action),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the check command.
fn run_check(cli: &Cli, config: &LintConfig, args: CheckArgs) -> Result<()> {
    use crate::git::Repository;
    use crate::lint::LintEngine;

    tracing::debug!("Running check command with args: {:?}", args);

    let engine = LintEngine::new(config.clone());

    let mut results = if let Some(ref message) = args.message {
        vec![engine.lint_message(message)]
    } else if let Some(ref path) = args.message_file {
        let message = std::fs::read_to_string(path)?;
        vec![engine.lint_message(&message)]
    } else {
        let repo = Repository::open_current()?;
        if args.range || args.target.contains("..") {
            engine.check_range(&repo, &args.target)?
        } else {
            vec![engine.check_commit(&repo, &args.target)?]
        }
    };

    if args.strict {
        for result in &mut results {
            result.promote_warnings();
        }
    }

    let mut error_count = 0;
    for result in &results {
        error_count += result.errors.len();
        result.print(cli.format);
    }

    if error_count > 0 {
        Err(RepolintError::Lint(LintError::ChecksFailed {
            count: error_count,
        }))
    } else {
        Ok(())
    }
}

/// Run the manifest command.
fn run_manifest(cli: &Cli, args: ManifestArgs) -> Result<()> {
    use crate::manifest;

    tracing::debug!("Running manifest command with args: {:?}", args);

    let (path, suite) = match args.path {
        Some(path) => {
            let suite = manifest::load_manifest_from(&path)?;
            (path, suite)
        }
        None => manifest::load_manifest()?,
    };

    let mut result = suite.validate(path.display().to_string());
    if args.strict {
        result.promote_warnings();
    }

    result.print(cli.format);

    if result.is_valid() {
        if cli.format.is_none() {
            println!("✓ {} ({})", path.display(), result.summary());
        }
        Ok(())
    } else {
        Err(RepolintError::Lint(LintError::ChecksFailed {
            count: result.errors.len(),
        }))
    }
}

/// Run the hooks command.
fn run_hooks(action: HooksAction) -> Result<()> {
    use crate::hooks::{HookManager, HookStatus};

    tracing::debug!("Running hooks command");

    let manager = HookManager::new()?;

    match action {
        HooksAction::Install { hook, force } => {
            if let Some(hook_name) = hook {
                manager.install_hook(&hook_name, force)?;
                println!("✓ Installed {} hook", hook_name);
            } else {
                manager.install_all(force)?;
                println!("✓ Installed all hooks");
            }
        }
        HooksAction::Uninstall { hook } => {
            if let Some(hook_name) = hook {
                manager.uninstall_hook(&hook_name)?;
                println!("✓ Uninstalled {} hook", hook_name);
            } else {
                manager.uninstall_all()?;
                println!("✓ Uninstalled all hooks");
            }
        }
        HooksAction::Status => {
            for (hook, status) in manager.status() {
                let label = match status {
                    HookStatus::Installed => "✓ installed",
                    HookStatus::Foreign => "! foreign",
                    HookStatus::Missing => "✗ missing",
                };
                println!("{:12} {}", hook, label);
            }
        }
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::{example_lint_config, example_manifest};

    tracing::debug!("Running init command with args: {:?}", args);

    let files = [
        (".commitlintrc.json", example_lint_config()),
        (".pre-commit-config.yaml", example_manifest()),
    ];

    for (name, content) in files {
        let path = std::path::Path::new(name);
        if path.exists() && !args.force {
            return Err(RepolintError::WithContext {
                context: "init".to_string(),
                message: format!("{} already exists. Use --force to overwrite.", name),
            });
        }
        std::fs::write(path, content).map_err(|e| RepolintError::WithContext {
            context: "init".to_string(),
            message: format!("Failed to write {}: {}", name, e),
        })?;
        println!("✓ Created {}", name);
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("repolint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
