// SPDX-License-Identifier: MIT

//! Command-line interface.

pub mod args;
mod dispatch;

pub use args::{Cli, Commands, OutputFormat};
pub use dispatch::run;
