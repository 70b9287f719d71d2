// ABOUTME: Server library for Specgen: configuration and auth token helpers
// ABOUTME: The binary entry point lives in main.rs

pub mod auth;
pub mod config;

pub use config::{Config, ConfigError};
