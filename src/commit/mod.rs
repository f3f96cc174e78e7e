// SPDX-License-Identifier: MIT

//! Commit message parsing.

mod header;

pub use header::CommitMessage;
