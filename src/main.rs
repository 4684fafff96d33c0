// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, logging and the Google Maps client, then start HTTP server

use actix_web::{middleware::Logger, web, App, HttpServer};
use places_scraper::config::Config;
use places_scraper::handlers;
use places_scraper::services::GoogleMapsClient;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load configuration (environment, then API key file)
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // 2. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting places-scraper service...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 3. Google Maps client, shared read-only across workers
    let client = web::Data::new(GoogleMapsClient::from_config(&config));
    log::info!("Google Maps API base: {}", client.base_url());

    // 4. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::search_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
