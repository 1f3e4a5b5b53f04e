//! 云端 IP 情报查询实现
//!
//! 通过 HTTPS 调用云端服务，只消费其 JSON 响应，不实现服务端协议。
//! 内置 Moka 缓存 + Singleflight 语义，避免重复查询。

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use serde_json::{Map, Value};
use tracing::{trace, warn};
use ureq::Agent;

use super::provider::{IpIntelligence, IpIntelligenceLookup};
use crate::config::CloudConfig;
use crate::engine::{WeightedValue, WeightedValueSequence, WeightedValues};
use crate::errors::{IpIntelError, Result};

/// 原始权重的满量程（云端返回 0..=65535 的整数权重）
const RAW_WEIGHTING_SCALE: f32 = 65535.0;

/// 云端 Provider
///
/// 内置 Moka 缓存：
/// - 容量和 TTL 来自 CloudConfig
/// - Singleflight：同一 IP 的并发请求只发一次 HTTP
/// - 失败的查询不缓存
pub struct CloudProvider {
    /// 已填入 resource key 的 URL 模板，仍保留 `{ip}` 占位符
    url_template: String,
    agent: Agent,
    cache: Cache<IpAddr, IpIntelligence>,
}

impl CloudProvider {
    pub fn new(config: &CloudConfig, resource_key: &str) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .build()
            .into();

        let cache = Cache::builder()
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .max_capacity(config.cache_capacity)
            .build();

        Self {
            url_template: config.endpoint.replace("{resource_key}", resource_key),
            agent,
            cache,
        }
    }

    /// 生成某个 IP 的请求 URL
    pub fn request_url(&self, ip: &IpAddr) -> String {
        self.url_template.replace("{ip}", &ip.to_string())
    }

    /// 同步请求云端（在 spawn_blocking 中调用）
    fn fetch_sync(agent: Agent, url: String, ip: IpAddr) -> Result<IpIntelligence> {
        let resp = agent.get(&url).call().map_err(|e| {
            warn!("Cloud request for {} failed: {}", ip, e);
            IpIntelError::lookup(format!("Cloud request failed: {}", e))
        })?;

        let json: Value = resp.into_body().read_json().map_err(|e| {
            warn!("Cloud response for {} could not be parsed: {}", ip, e);
            IpIntelError::serialization(format!("Cloud response parse failed: {}", e))
        })?;

        parse_response(&ip.to_string(), &json)
    }

    async fn fetch(&self, ip: IpAddr) -> Result<IpIntelligence> {
        let url = self.request_url(&ip);
        let agent = self.agent.clone();

        tokio::task::spawn_blocking(move || Self::fetch_sync(agent, url, ip))
            .await
            .map_err(|e| IpIntelError::lookup(format!("Cloud lookup task failed: {}", e)))?
    }
}

#[async_trait]
impl IpIntelligenceLookup for CloudProvider {
    /// 查询 IP（带缓存 + Singleflight）
    async fn lookup(&self, ip: &str) -> Result<IpIntelligence> {
        let ip_addr: IpAddr = ip
            .trim()
            .parse()
            .map_err(|_| IpIntelError::validation(format!("Invalid IP address: '{}'", ip)))?;

        self.cache
            .try_get_with(ip_addr, async {
                trace!("Cloud cache miss for {}, fetching", ip_addr);
                self.fetch(ip_addr).await
            })
            .await
            .map_err(|e: Arc<IpIntelError>| (*e).clone())
    }

    fn name(&self) -> &'static str {
        "Cloud"
    }
}

/// 属性名比较时忽略大小写和下划线
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn property<'a>(section: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    let wanted = normalize_key(name);
    section
        .iter()
        .find(|(key, _)| normalize_key(key) == wanted)
        .map(|(_, value)| value)
        .filter(|value| !value.is_null())
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn weighting_of(item: &Map<String, Value>) -> f32 {
    if let Some(w) = property(item, "weighting").and_then(Value::as_f64) {
        return w as f32;
    }
    if let Some(raw) = property(item, "rawweighting").and_then(Value::as_f64) {
        return raw as f32 / RAW_WEIGHTING_SCALE;
    }
    1.0
}

/// 解析加权列表：`[{"value": .., "weighting": ..}]`、字符串数组或单个标量
fn weighted_strings(value: Option<&Value>) -> WeightedValues<String> {
    let Some(value) = value else {
        return WeightedValues::default();
    };

    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(obj) => {
                    let text = property(obj, "value").and_then(scalar_string)?;
                    Some(WeightedValue::new(text, weighting_of(obj)))
                }
                other => scalar_string(other).map(|text| WeightedValue::new(text, 1.0)),
            })
            .collect(),
        other => scalar_string(other)
            .map(WeightedValues::single)
            .unwrap_or_default(),
    }
}

fn best_string(value: Option<&Value>) -> Option<String> {
    weighted_strings(value).best().map(|v| v.value)
}

fn best_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        other => best_string(Some(other)).and_then(|s| s.trim().parse().ok()),
    }
}

/// 解析云端 JSON 响应
///
/// 属性位于 `ip` 节点下（不存在时读取根节点）。响应中的 `errors` 非空时返回错误。
pub fn parse_response(ip: &str, json: &Value) -> Result<IpIntelligence> {
    let Some(root) = json.as_object() else {
        return Err(IpIntelError::serialization(
            "Cloud response is not a JSON object",
        ));
    };

    if let Some(Value::Array(errors)) = property(root, "errors")
        && !errors.is_empty()
    {
        let messages: Vec<String> = errors.iter().filter_map(scalar_string).collect();
        return Err(IpIntelError::lookup(format!(
            "Cloud service returned errors: {}",
            messages.join("; ")
        )));
    }

    let section = match property(root, "ip") {
        Some(Value::Object(section)) => section,
        _ => root,
    };

    Ok(IpIntelligence {
        ip: ip.to_string(),
        registered_name: weighted_strings(property(section, "registeredname")),
        registered_owner: weighted_strings(property(section, "registeredowner")),
        registered_country: weighted_strings(property(section, "registeredcountry")),
        country_code: weighted_strings(property(section, "countrycode")),
        town: weighted_strings(property(section, "town")),
        latitude: best_f64(property(section, "latitude")),
        longitude: best_f64(property(section, "longitude")),
        accuracy_radius: best_f64(property(section, "accuracyradius"))
            .filter(|r| *r >= 0.0)
            .map(|r| r.round() as u32),
        areas: best_string(property(section, "areas")),
    })
}
