// SPDX-License-Identifier: MIT

//! Pre-commit manifest handling.
//!
//! Loads, models and validates the `.pre-commit-config.yaml` hook suite.
//! Executing the hooks remains the external runner's job.

mod loader;
mod schema;
mod validate;

pub use loader::{find_manifest_file, find_manifest_file_from, load_manifest, load_manifest_from, parse_manifest};
pub use schema::{HookInvocation, HookSource, HookSuite, SENTINEL_REPOS};
