//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod area;
mod config;
mod engine;
mod lookup;
mod marshal;

pub use area::*;
pub use config::*;
pub use engine::*;
pub use lookup::*;
pub use marshal::*;
