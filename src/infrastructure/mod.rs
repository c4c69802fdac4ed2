//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: environment configuration, log sinks and runtime wiring.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Credential and settings loading
//! - [`logging`] - Log line format and rotating log file

pub mod bootstrap;
pub mod config;
pub mod logging;
