//! CLI command handlers

pub mod commands;
pub mod reporter;

pub use commands::{convert, prepare_output_dir, validate_args};
