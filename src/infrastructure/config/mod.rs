//! Infrastructure configuration modules.

pub mod credentials;
pub mod logging;
pub mod settings;

pub use credentials::{check_tokens, Credentials};
pub use logging::LoggingConfig;
pub use settings::Settings;
