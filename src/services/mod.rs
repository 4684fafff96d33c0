// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod aggregator;
pub mod csv_export;
pub mod geo_resolver;
pub mod google_maps_client;
pub mod place_details;
pub mod query_builder;
pub mod search_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregator::*;
pub use csv_export::*;
pub use geo_resolver::*;
pub use google_maps_client::*;
pub use place_details::*;
pub use query_builder::*;
pub use search_service::*;
