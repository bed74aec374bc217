//! Command implementations.

pub mod config;
pub mod files;
pub mod parse;
pub mod predict;

pub use self::config::execute_config;
pub use self::files::execute_files;
pub use self::parse::execute_parse;
pub use self::predict::execute_predict;
