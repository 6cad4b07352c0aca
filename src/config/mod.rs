// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod env;

pub use env::Config;
#[cfg(test)]
pub(crate) use env::test_config;
