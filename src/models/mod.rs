// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod analysis;
pub mod place;
pub mod review;

pub use analysis::*;
pub use place::*;
pub use review::*;
