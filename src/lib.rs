//! Library crate root re-exporting the checker, CLI, and configuration modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod checker;
pub mod cli;
pub mod config;
