//! VS Code installer library
//!
//! Flag parsing, action resolution and the download, install, link and help
//! actions behind the `vscode-installer` binary.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
