// SPDX-License-Identifier: MIT

//! Commit-lint policy configuration.
//!
//! This module handles loading and parsing the commit-lint rule set from
//! `.commitlintrc.json`, with the parent policy as the built-in default.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, default_rules};
pub use loader::{find_config_file, find_config_file_from, load_config, parse_config};
pub use schema::*;
