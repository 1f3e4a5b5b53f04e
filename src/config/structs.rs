use serde::{Deserialize, Serialize};

use crate::engine::PerformanceProfile;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀，例如 `IPI__CLOUD__RESOURCE_KEY`
pub const ENV_PREFIX: &str = "IPI";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - engine: 本地原生引擎配置
/// - cloud: 云端查询配置
/// - logging: 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub cloud: CloudConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > config.toml > 默认值
    /// ENV 前缀：IPI，分隔符：__
    /// 示例：IPI__ENGINE__CONCURRENCY=8
    pub fn load() -> Self {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// 从指定路径加载，失败时回退到默认值
    pub fn load_from(path: &str) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => {
                if std::path::Path::new(path).exists() {
                    eprintln!("[INFO] Configuration loaded from: {}", path);
                }
                config
            }
            Err(e) => {
                eprintln!("[ERROR] Failed to load config: {}", e);
                Self::default()
            }
        }
    }

    pub fn try_load_from(path: &str) -> crate::errors::Result<Self> {
        use config::{Config, Environment, File};

        let settings = Config::builder()
            // 1. 从 TOML 文件加载（可选）
            .add_source(File::with_name(path).required(false))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize::<StaticConfig>()?)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

/// 本地引擎配置
///
/// 每一项都原样转发给原生配置句柄，不在这里做额外校验。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// 数据文件路径，未配置时不使用本地引擎
    #[serde(default)]
    pub data_file: Option<String>,
    #[serde(default)]
    pub performance_profile: PerformanceProfile,
    #[serde(default = "default_concurrency")]
    pub concurrency: u16,
    #[serde(default)]
    pub reuse_temp_file: bool,
    #[serde(default)]
    pub use_upper_prefix_headers: bool,
}

/// 云端查询配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Resource key; cloud lookups are disabled without one
    #[serde(default)]
    pub resource_key: Option<String>,

    /// 请求 URL 模板，`{resource_key}` 和 `{ip}` 为占位符
    #[serde(default = "default_cloud_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_cloud_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_cloud_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_cloud_cache_capacity")]
    pub cache_capacity: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_log_file")]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

// ============================================================
// Default value functions for static config
// ============================================================

fn default_concurrency() -> u16 {
    u16::try_from(num_cpus::get()).unwrap_or(u16::MAX).max(1)
}

fn default_cloud_endpoint() -> String {
    "https://cloud.51degrees.com/api/v4/{resource_key}.json?client-ip={ip}".to_string()
}

fn default_cloud_timeout() -> u64 {
    5
}

fn default_cloud_cache_ttl() -> u64 {
    15 * 60
}

fn default_cloud_cache_capacity() -> u64 {
    10_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_log_file() -> Option<String> {
    None
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            data_file: None,
            performance_profile: PerformanceProfile::default(),
            concurrency: default_concurrency(),
            reuse_temp_file: false,
            use_upper_prefix_headers: false,
        }
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            resource_key: None,
            endpoint: default_cloud_endpoint(),
            timeout_secs: default_cloud_timeout(),
            cache_ttl_secs: default_cloud_cache_ttl(),
            cache_capacity: default_cloud_cache_capacity(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: default_log_file(),
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}
