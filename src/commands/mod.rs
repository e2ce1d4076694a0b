//! CLI commands

pub mod generate;
pub mod list;
pub mod search;
pub mod show;
