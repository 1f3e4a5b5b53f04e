use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumMessage, IntoEnumIterator};

/// 引擎性能档位
///
/// 决定原生引擎把数据文件放在内存还是磁盘上，以及缓存的大小。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    EnumIter,
    AsRefStr,
    EnumMessage,
)]
#[serde(rename_all = "PascalCase")]
#[strum(serialize_all = "PascalCase")]
pub enum PerformanceProfile {
    #[strum(message = "Data stays on disk, smallest memory footprint")]
    LowMemory,
    #[default]
    #[strum(message = "Frequently used data cached in memory")]
    Balanced,
    #[strum(message = "Balanced, working from a temporary copy of the data file")]
    BalancedTemp,
    #[strum(message = "Most data loaded into memory")]
    HighPerformance,
    #[strum(message = "Entire data file loaded into memory")]
    MaxPerformance,
}

impl PerformanceProfile {
    /// Discriminant understood by the native configuration handle.
    pub fn native_code(&self) -> u32 {
        match self {
            Self::LowMemory => 0,
            Self::Balanced => 1,
            Self::BalancedTemp => 2,
            Self::HighPerformance => 3,
            Self::MaxPerformance => 4,
        }
    }

    pub fn description(&self) -> &'static str {
        self.get_message().unwrap_or("")
    }

    /// 逗号分隔的全部档位名称，用于错误提示
    pub fn valid_names() -> String {
        Self::iter()
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for PerformanceProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl std::str::FromStr for PerformanceProfile {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "lowmemory" => Ok(Self::LowMemory),
            "balanced" => Ok(Self::Balanced),
            "balancedtemp" => Ok(Self::BalancedTemp),
            "highperformance" => Ok(Self::HighPerformance),
            "maxperformance" => Ok(Self::MaxPerformance),
            _ => Err(format!(
                "Invalid performance profile: '{}'. Valid: {}",
                s,
                Self::valid_names()
            )),
        }
    }
}
