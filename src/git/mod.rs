// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Thin wrapper over git2 for the pieces the linter needs: reading commit
//! messages by revspec and locating the hooks directory.

mod repo;

pub use repo::Repository;
