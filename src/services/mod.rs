//! Service layer
//!
//! Lookup services shared by the CLI and library callers.

pub mod lookup;

pub use lookup::{IpIntelligence, IpIntelligenceLookup, IpIntelligenceProvider};
