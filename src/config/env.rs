// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;
use std::str::FromStr;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "127.0.0.1")
    pub server_address: String,

    /// Server listen port (default 8003)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Google Places API Key
    pub google_places_api_key: String,

    /// Base URL of the Places web service
    pub google_places_base_url: String,

    /// Timeout for each outbound Places request, in seconds
    pub http_timeout_secs: u64,

    /// Location hint appended to every hotel search
    pub default_location: String,

    /// Hotel name pre-filled in the search page
    pub default_hotel_name: String,

    /// Admin authentication token (for cache endpoints)
    pub admin_token: String,

    pub wordcloud_width: u32,
    pub wordcloud_height: u32,
    pub wordcloud_max_words: usize,
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        Config {
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1".to_string()),

            server_port: parse_var("SERVER_PORT", 8003),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            google_places_api_key: env::var("GOOGLE_PLACES_API_KEY")
                .unwrap_or_else(|_| String::new()),

            google_places_base_url: env::var("GOOGLE_PLACES_BASE_URL").unwrap_or_else(|_| {
                crate::services::GOOGLE_PLACES_BASE_URL.to_string()
            }),

            http_timeout_secs: parse_var("HTTP_TIMEOUT_SECS", 30),

            default_location: env::var("DEFAULT_LOCATION").unwrap_or_else(|_| "India".to_string()),

            default_hotel_name: env::var("DEFAULT_HOTEL_NAME")
                .unwrap_or_else(|_| "Taj Mahal Palace Mumbai".to_string()),

            admin_token: env::var("ADMIN_TOKEN").unwrap_or_else(|_| "admin-token-dev".to_string()),

            wordcloud_width: parse_var("WORDCLOUD_WIDTH", 800),
            wordcloud_height: parse_var("WORDCLOUD_HEIGHT", 400),
            wordcloud_max_words: parse_var("WORDCLOUD_MAX_WORDS", 200),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.google_places_api_key.is_empty() {
            return Err("GOOGLE_PLACES_API_KEY is required".to_string());
        }

        if self.wordcloud_width == 0 || self.wordcloud_height == 0 {
            return Err("WORDCLOUD_WIDTH and WORDCLOUD_HEIGHT must be positive".to_string());
        }

        if self.wordcloud_max_words == 0 {
            return Err("WORDCLOUD_MAX_WORDS must be positive".to_string());
        }

        if self.default_location.trim().is_empty() {
            log::warn!("DEFAULT_LOCATION is empty - searches will end with a bare comma");
        }

        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring unparsable {}={:?}", name, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        server_address: "127.0.0.1".to_string(),
        server_port: 8003,
        environment: "test".to_string(),
        log_level: "debug".to_string(),
        google_places_api_key: "test-key".to_string(),
        google_places_base_url: crate::services::GOOGLE_PLACES_BASE_URL.to_string(),
        http_timeout_secs: 5,
        default_location: "India".to_string(),
        default_hotel_name: "Taj Mahal Palace Mumbai".to_string(),
        admin_token: "secret".to_string(),
        wordcloud_width: 800,
        wordcloud_height: 400,
        wordcloud_max_words: 200,
    }
}
