//! 原生引擎配置句柄
//!
//! `NativeConfigHandle` 是绑定层暴露出来的最小调用面：每项设置对应一次原生调用。
//! 句柄由引擎/流水线对象持有，本 crate 只借用，不负责释放。

use std::convert::Infallible;
use std::fmt;

use serde::Serialize;

/// Binding surface of a native engine configuration object.
///
/// Failures are whatever the native layer reports; implementors must not
/// translate them.
pub trait NativeConfigHandle {
    type Error: fmt::Debug + fmt::Display;

    fn set_performance_profile(&mut self, code: u32) -> Result<(), Self::Error>;

    fn set_concurrency(&mut self, concurrency: u16) -> Result<(), Self::Error>;

    fn set_reuse_temp_file(&mut self, reuse: bool) -> Result<(), Self::Error>;

    fn set_use_upper_prefix_headers(&mut self, upper: bool) -> Result<(), Self::Error>;
}

/// 一次转发到原生句柄的调用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "call", content = "value", rename_all = "snake_case")]
pub enum ConfigCall {
    PerformanceProfile(u32),
    Concurrency(u16),
    ReuseTempFile(bool),
    UseUpperPrefixHeaders(bool),
}

impl fmt::Display for ConfigCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerformanceProfile(code) => write!(f, "set_performance_profile({})", code),
            Self::Concurrency(n) => write!(f, "set_concurrency({})", n),
            Self::ReuseTempFile(v) => write!(f, "set_reuse_temp_file({})", v),
            Self::UseUpperPrefixHeaders(v) => write!(f, "set_use_upper_prefix_headers({})", v),
        }
    }
}

/// In-process handle that records every call instead of reaching a native
/// engine. Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct RecordingConfigHandle {
    calls: Vec<ConfigCall>,
}

impl RecordingConfigHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[ConfigCall] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<ConfigCall> {
        self.calls
    }
}

impl NativeConfigHandle for RecordingConfigHandle {
    type Error = Infallible;

    fn set_performance_profile(&mut self, code: u32) -> Result<(), Self::Error> {
        self.calls.push(ConfigCall::PerformanceProfile(code));
        Ok(())
    }

    fn set_concurrency(&mut self, concurrency: u16) -> Result<(), Self::Error> {
        self.calls.push(ConfigCall::Concurrency(concurrency));
        Ok(())
    }

    fn set_reuse_temp_file(&mut self, reuse: bool) -> Result<(), Self::Error> {
        self.calls.push(ConfigCall::ReuseTempFile(reuse));
        Ok(())
    }

    fn set_use_upper_prefix_headers(&mut self, upper: bool) -> Result<(), Self::Error> {
        self.calls.push(ConfigCall::UseUpperPrefixHeaders(upper));
        Ok(())
    }
}
