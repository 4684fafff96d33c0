// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod geocode;
pub mod place;
pub mod search;

pub use geocode::*;
pub use place::*;
pub use search::*;
