//! IP 情报查询抽象层
//!
//! 统一的查询接口，根据配置自动选择实现：
//! 1. 提供了本地引擎，且 engine.data_file 已配置并可读 → 本地引擎
//! 2. 否则配置了 cloud.resource_key → CloudProvider
//! 3. 都没有 → 配置错误

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::StaticConfig;
use crate::engine::{WeightedValueSequence, WeightedValues};
use crate::errors::{IpIntelError, Result};
use crate::geometry::{AreaResult, calculate_area};

/// IP 情报查询结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpIntelligence {
    /// 查询的 IP
    pub ip: String,
    /// 注册名称（可能有多个候选）
    pub registered_name: WeightedValues<String>,
    pub registered_owner: WeightedValues<String>,
    pub registered_country: WeightedValues<String>,
    /// ISO 3166-1 alpha-2 国家代码 (e.g., "FI", "US")
    pub country_code: WeightedValues<String>,
    pub town: WeightedValues<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// 精度半径（米）
    pub accuracy_radius: Option<u32>,
    /// 覆盖区域（WKT）
    pub areas: Option<String>,
}

impl IpIntelligence {
    /// 覆盖区域的投影面积；没有区域时返回 None
    pub fn area(&self) -> Option<AreaResult> {
        self.areas.as_deref().map(calculate_area)
    }

    /// 权重最高的注册名称
    pub fn best_registered_name(&self) -> Option<String> {
        self.registered_name.best().map(|v| v.value)
    }
}

/// IP 情报查询 trait
#[async_trait]
pub trait IpIntelligenceLookup: Send + Sync {
    /// 查询 IP 地址
    async fn lookup(&self, ip: &str) -> Result<IpIntelligence>;

    /// 获取 provider 名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 统一 IP 情报 Provider
///
/// 启动时根据配置选择实现
pub struct IpIntelligenceProvider {
    inner: Arc<dyn IpIntelligenceLookup>,
}

impl IpIntelligenceProvider {
    /// 根据 StaticConfig 初始化
    ///
    /// `on_premise` 是宿主程序通过原生绑定构建的本地引擎查询实现。
    pub fn new(
        config: &StaticConfig,
        on_premise: Option<Arc<dyn IpIntelligenceLookup>>,
    ) -> Result<Self> {
        if let Some(ref path) = config.engine.data_file {
            match on_premise {
                Some(lookup) if std::path::Path::new(path).is_file() => {
                    info!("IP intelligence: Using on-premise engine with data file {}", path);
                    return Ok(Self::from_lookup(lookup));
                }
                Some(_) => {
                    warn!(
                        "IP intelligence: Data file {} is not readable, falling back to cloud",
                        path
                    );
                }
                None => {
                    debug!(
                        "IP intelligence: Data file {} configured but no on-premise engine supplied",
                        path
                    );
                }
            }
        }

        Self::cloud(config)
    }

    #[cfg(feature = "cloud")]
    fn cloud(config: &StaticConfig) -> Result<Self> {
        use super::cloud::CloudProvider;

        match config.cloud.resource_key.as_deref() {
            Some(key) if !key.trim().is_empty() => {
                let provider = CloudProvider::new(&config.cloud, key);
                Ok(Self::from_lookup(Arc::new(provider)))
            }
            _ => Err(IpIntelError::config(
                "No lookup provider available: set engine.data_file with an on-premise engine, or cloud.resource_key",
            )),
        }
    }

    #[cfg(not(feature = "cloud"))]
    fn cloud(_config: &StaticConfig) -> Result<Self> {
        Err(IpIntelError::config(
            "No lookup provider available: set engine.data_file with an on-premise engine (cloud support not compiled in)",
        ))
    }

    pub fn from_lookup(inner: Arc<dyn IpIntelligenceLookup>) -> Self {
        info!("IP intelligence: Initialized with {} provider", inner.name());
        Self { inner }
    }

    /// 查询 IP 地址
    pub async fn lookup(&self, ip: &str) -> Result<IpIntelligence> {
        self.inner.lookup(ip).await
    }

    /// 获取当前使用的 provider 名称
    pub fn provider_name(&self) -> &'static str {
        self.inner.name()
    }
}

impl Clone for IpIntelligenceProvider {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
