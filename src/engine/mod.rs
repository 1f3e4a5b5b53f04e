//! On-premise engine wrappers
//!
//! Narrow interfaces over the native engine binding: configuration
//! forwarding and weighted result lists. The native handles themselves are
//! owned by the engine; everything here borrows them.

mod configuration;
mod handle;
mod profile;
mod weighted;

pub use configuration::{
    ApplySettingsError, EngineConfiguration, NativeEngineConfiguration, apply_settings,
};
pub use handle::{ConfigCall, NativeConfigHandle, RecordingConfigHandle};
pub use profile::PerformanceProfile;
pub use weighted::{
    NativeWeightedList, NativeWeightedValues, WeightedValue, WeightedValueIter,
    WeightedValueSequence, WeightedValues,
};
