use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpIntelError {
    WktParse(String),
    Projection(String),
    TypeMismatch(String),
    Marshal(String),
    Config(String),
    Validation(String),
    Lookup(String),
    Serialization(String),
    FileOperation(String),
}

impl IpIntelError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            IpIntelError::WktParse(_) => "E001",
            IpIntelError::Projection(_) => "E002",
            IpIntelError::TypeMismatch(_) => "E003",
            IpIntelError::Marshal(_) => "E004",
            IpIntelError::Config(_) => "E005",
            IpIntelError::Validation(_) => "E006",
            IpIntelError::Lookup(_) => "E007",
            IpIntelError::Serialization(_) => "E008",
            IpIntelError::FileOperation(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            IpIntelError::WktParse(_) => "WKT Parse Error",
            IpIntelError::Projection(_) => "Projection Error",
            IpIntelError::TypeMismatch(_) => "Type Mismatch",
            IpIntelError::Marshal(_) => "Marshal Error",
            IpIntelError::Config(_) => "Configuration Error",
            IpIntelError::Validation(_) => "Validation Error",
            IpIntelError::Lookup(_) => "Lookup Error",
            IpIntelError::Serialization(_) => "Serialization Error",
            IpIntelError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            IpIntelError::WktParse(msg) => msg,
            IpIntelError::Projection(msg) => msg,
            IpIntelError::TypeMismatch(msg) => msg,
            IpIntelError::Marshal(msg) => msg,
            IpIntelError::Config(msg) => msg,
            IpIntelError::Validation(msg) => msg,
            IpIntelError::Lookup(msg) => msg,
            IpIntelError::Serialization(msg) => msg,
            IpIntelError::FileOperation(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for IpIntelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for IpIntelError {}

// 便捷的构造函数
impl IpIntelError {
    pub fn wkt_parse<T: Into<String>>(msg: T) -> Self {
        IpIntelError::WktParse(msg.into())
    }

    pub fn projection<T: Into<String>>(msg: T) -> Self {
        IpIntelError::Projection(msg.into())
    }

    pub fn type_mismatch<T: Into<String>>(msg: T) -> Self {
        IpIntelError::TypeMismatch(msg.into())
    }

    pub fn marshal<T: Into<String>>(msg: T) -> Self {
        IpIntelError::Marshal(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        IpIntelError::Config(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        IpIntelError::Validation(msg.into())
    }

    pub fn lookup<T: Into<String>>(msg: T) -> Self {
        IpIntelError::Lookup(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        IpIntelError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        IpIntelError::FileOperation(msg.into())
    }
}

impl From<std::io::Error> for IpIntelError {
    fn from(err: std::io::Error) -> Self {
        IpIntelError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for IpIntelError {
    fn from(err: serde_json::Error) -> Self {
        IpIntelError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for IpIntelError {
    fn from(err: config::ConfigError) -> Self {
        IpIntelError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IpIntelError>;
