//! Engine configuration capability
//!
//! [`EngineConfiguration`] is what callers program against;
//! [`NativeEngineConfiguration`] implements it by forwarding each setting as
//! exactly one call on a borrowed [`NativeConfigHandle`].

use std::fmt;
use std::num::NonZeroU16;

use tracing::debug;

use super::handle::NativeConfigHandle;
use super::profile::PerformanceProfile;
use crate::config::EngineSettings;

/// Settings an on-premise engine accepts before it is built.
pub trait EngineConfiguration {
    type Error;

    fn set_performance_profile(&mut self, profile: PerformanceProfile) -> Result<(), Self::Error>;

    fn set_concurrency(&mut self, concurrency: NonZeroU16) -> Result<(), Self::Error>;

    fn set_reuse_temp_file(&mut self, reuse: bool) -> Result<(), Self::Error>;

    fn set_use_upper_prefix_headers(&mut self, upper: bool) -> Result<(), Self::Error>;
}

/// Forwarding adapter over a native configuration handle.
///
/// Holds a non-owning `&mut` borrow: the handle belongs to the engine or
/// pipeline that created it, and the borrow keeps this adapter from
/// outliving it. No validation or error translation happens here.
pub struct NativeEngineConfiguration<'h, H: NativeConfigHandle> {
    handle: &'h mut H,
}

impl<'h, H: NativeConfigHandle> NativeEngineConfiguration<'h, H> {
    pub fn new(handle: &'h mut H) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &H {
        &*self.handle
    }
}

impl<H: NativeConfigHandle> EngineConfiguration for NativeEngineConfiguration<'_, H> {
    type Error = H::Error;

    fn set_performance_profile(&mut self, profile: PerformanceProfile) -> Result<(), Self::Error> {
        debug!("Engine config: performance profile = {}", profile);
        self.handle.set_performance_profile(profile.native_code())
    }

    fn set_concurrency(&mut self, concurrency: NonZeroU16) -> Result<(), Self::Error> {
        debug!("Engine config: concurrency = {}", concurrency);
        self.handle.set_concurrency(concurrency.get())
    }

    fn set_reuse_temp_file(&mut self, reuse: bool) -> Result<(), Self::Error> {
        debug!("Engine config: reuse temp file = {}", reuse);
        self.handle.set_reuse_temp_file(reuse)
    }

    fn set_use_upper_prefix_headers(&mut self, upper: bool) -> Result<(), Self::Error> {
        debug!("Engine config: upper-case prefix headers = {}", upper);
        self.handle.set_use_upper_prefix_headers(upper)
    }
}

/// Failure while applying [`EngineSettings`].
#[derive(Debug, PartialEq, Eq)]
pub enum ApplySettingsError<E> {
    /// Concurrency was 0; nothing was forwarded.
    InvalidConcurrency,
    /// The native layer rejected a setting. Earlier settings were applied.
    Native(E),
}

impl<E: fmt::Display> fmt::Display for ApplySettingsError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConcurrency => write!(f, "Engine concurrency must be a positive integer"),
            Self::Native(e) => write!(f, "Native engine rejected setting: {}", e),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for ApplySettingsError<E> {}

/// Apply every setting in a fixed order: profile, concurrency, temp-file
/// reuse, header prefix case.
pub fn apply_settings<C: EngineConfiguration>(
    config: &mut C,
    settings: &EngineSettings,
) -> Result<(), ApplySettingsError<C::Error>> {
    let concurrency =
        NonZeroU16::new(settings.concurrency).ok_or(ApplySettingsError::InvalidConcurrency)?;

    config
        .set_performance_profile(settings.performance_profile)
        .map_err(ApplySettingsError::Native)?;
    config
        .set_concurrency(concurrency)
        .map_err(ApplySettingsError::Native)?;
    config
        .set_reuse_temp_file(settings.reuse_temp_file)
        .map_err(ApplySettingsError::Native)?;
    config
        .set_use_upper_prefix_headers(settings.use_upper_prefix_headers)
        .map_err(ApplySettingsError::Native)?;

    Ok(())
}
