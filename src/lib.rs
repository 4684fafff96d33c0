// src/lib.rs
// DOCUMENTATION: Library root
// PURPOSE: Shared modules for the HTTP service and the scrape CLI

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
