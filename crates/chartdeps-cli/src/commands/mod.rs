//! CLI commands

pub mod extract;
