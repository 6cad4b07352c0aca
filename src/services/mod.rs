// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod analyzer;
pub mod cache;
pub mod google_places_client;
pub mod place_resolver;
pub mod review_projector;
pub mod wordcloud;

#[cfg(test)]
pub(crate) mod test_support;

pub use analyzer::*;
pub use cache::*;
pub use google_places_client::*;
pub use place_resolver::*;
pub use review_projector::*;
pub use wordcloud::*;
