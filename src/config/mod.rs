/// Configuration system
///
/// Sections are declared with [`config_struct!`](crate::config_struct) in
/// `schemas/`, loaded from TOML by `utils`.
pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::*;
pub use utils::{apply_env_overrides, load_config_from_path, parse_config, validate_config, RPC_URL_ENV};
