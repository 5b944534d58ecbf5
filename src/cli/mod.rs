//! Command-line interface: argument parsing and runtime setup

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, RunArgs};
pub use setup::{configure_thread_pool, init_logging};
