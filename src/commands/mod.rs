//! CLI command implementations.
//!
//! - **analyze**: classify a model snapshot and print the report
//! - **validate**: analyze and fail below a fitness threshold
//! - **init**: write a default `.dddmap.toml`

pub mod analyze;
pub mod init;
pub mod validate;

pub use analyze::handle_analyze;
pub use init::init_config;
pub use validate::validate_model;
