// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod credentials;
pub mod env;

pub use credentials::load_api_key;
pub use env::Config;
