//! Source merging for configuration.

pub mod service;
