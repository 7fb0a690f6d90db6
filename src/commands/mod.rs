//! CLI commands

pub mod info;
pub mod list;
