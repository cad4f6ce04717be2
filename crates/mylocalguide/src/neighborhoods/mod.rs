//! Address-to-neighborhood resolution.
//!
//! A venue's name and free-text address run through a fixed cascade of rule
//! evaluators built from static reference tables. Every call produces an
//! answer; the confidence label tells callers how far down the cascade it came
//! from.

mod config;
mod data;
pub mod domain;
mod geocoding;
mod normalizer;
mod resolver;
pub mod router;
mod rules;
pub mod tables;

pub use config::ResolverConfig;
pub use domain::{
    slugify, Confidence, Neighborhood, NeighborhoodId, ResolutionMethod, ResolutionResult,
    VenueAddressInput,
};
pub use geocoding::{GeocodingGateway, StaticGeocoder};
pub use resolver::NeighborhoodResolver;
pub use router::neighborhood_router;
pub use tables::{
    LandmarkRule, NeighborhoodProfile, ReferenceTables, StreetRange, StreetRule, TableError,
    ZipRule,
};
