//! Command-line interface: argument parsing and terminal rendering

pub mod args;
pub mod display;

pub use args::{Args, Commands, Verbosity};
