//! Homework review API integration.

pub mod client;

pub use client::{PracticumClient, DEFAULT_ENDPOINT};
