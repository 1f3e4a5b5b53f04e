//! IP 情报查询模块
//!
//! 提供 IP 地址情报查询功能，支持：
//! - 宿主程序注入的本地原生引擎
//! - 云端 HTTP 服务 (cloud feature)

#[cfg(feature = "cloud")]
mod cloud;
mod provider;

#[cfg(feature = "cloud")]
pub use cloud::{CloudProvider, parse_response};
pub use provider::{IpIntelligence, IpIntelligenceLookup, IpIntelligenceProvider};
