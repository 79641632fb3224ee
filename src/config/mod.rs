//! Configuration module for ps3mem
//!
//! Loading, validation, and defaults for the transport parameters: the
//! emulator process name and the guest-to-host memory layout.

mod loader;
mod validator;

pub use loader::{load_config, Config, ConfigError, ConfigLoader, DEFAULT_CONFIG_FILE};
pub use validator::{validate_config, ConfigValidator};

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
