// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, build the lookup pipeline, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{
    GooglePlacesClient, HotelAnalyzer, PlaceCache, PlaceResolver, RasterWordCloud, WordCloudOptions,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

fn startup_error(e: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e.to_string())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        return Err(startup_error(e));
    }

    log::info!("Starting hotel-review-analyzer...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Build the lookup pipeline
    let client = GooglePlacesClient::with_options(
        config.google_places_api_key.clone(),
        config.google_places_base_url.clone(),
        Duration::from_secs(config.http_timeout_secs),
    )
    .map_err(startup_error)?;

    let cache = Arc::new(PlaceCache::new());
    log::info!("Initialized session cache for hotel lookups");

    let resolver = PlaceResolver::new(Arc::new(client), config.default_location.clone())
        .with_cache(cache.clone());
    let renderer = RasterWordCloud::new(WordCloudOptions::from_config(&config)).map_err(startup_error)?;
    let analyzer = web::Data::new(HotelAnalyzer::new(resolver, Arc::new(renderer)));

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    HttpServer::new(move || {
        App::new()
            // Application state (config, cache, and pipeline)
            .app_data(web::Data::new(config_clone.clone()))
            .app_data(web::Data::new(cache.clone()))
            .app_data(analyzer.clone())
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::hotels_config)
            .configure(handlers::admin_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}
