//! ipintel - IP intelligence toolkit
//!
//! This library provides the pieces an IP intelligence client needs around a
//! native detection engine: area calculation for coverage geometries, UTF-8
//! string marshaling across the native boundary, thin wrappers over native
//! configuration and weighted result lists, and a cloud lookup fallback.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **cloud**: Cloud lookups over HTTPS (default)
//! - **ffi**: Export the C ABI symbols from `interop::ffi`
//! - **full**: All features enabled
//!
//! # Architecture
//! - `geometry`: WKT parsing, UTM projection and area in km²
//! - `interop`: Native UTF-8 buffers and C ABI entry points
//! - `engine`: Native configuration forwarding and weighted value sequences
//! - `services`: IP intelligence lookups (on-premise or cloud)
//! - `interfaces`: User interfaces (CLI)
//! - `config`: Configuration management
//! - `system`: Logging setup

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod geometry;
#[cfg(feature = "cli")]
pub mod interfaces;
pub mod interop;
pub mod services;
pub mod system;
