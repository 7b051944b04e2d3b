//! Command implementations behind the `gx` binary.

pub mod commands;

pub use commands::GraphInput;
