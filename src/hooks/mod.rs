// SPDX-License-Identifier: MIT

//! Git hook installation.

mod manager;
mod templates;

pub use manager::{HookManager, HookStatus};
pub use templates::HookTemplate;
