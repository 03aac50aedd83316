use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    Decode(String),
    Encode(String),
    InvalidLocationType(String),
    InvalidYesNo(String),
    FileOperation(String),
    Config(String),
    Export(String),
    Validation(String),
}

impl ProfileError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ProfileError::Decode(_) => "E001",
            ProfileError::Encode(_) => "E002",
            ProfileError::InvalidLocationType(_) => "E003",
            ProfileError::InvalidYesNo(_) => "E004",
            ProfileError::FileOperation(_) => "E005",
            ProfileError::Config(_) => "E006",
            ProfileError::Export(_) => "E007",
            ProfileError::Validation(_) => "E008",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ProfileError::Decode(_) => "Decode Error",
            ProfileError::Encode(_) => "Encode Error",
            ProfileError::InvalidLocationType(_) => "Invalid Location Type",
            ProfileError::InvalidYesNo(_) => "Invalid Yes/No Code",
            ProfileError::FileOperation(_) => "File Operation Error",
            ProfileError::Config(_) => "Configuration Error",
            ProfileError::Export(_) => "Type Export Error",
            ProfileError::Validation(_) => "Validation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ProfileError::Decode(msg)
            | ProfileError::Encode(msg)
            | ProfileError::InvalidLocationType(msg)
            | ProfileError::InvalidYesNo(msg)
            | ProfileError::FileOperation(msg)
            | ProfileError::Config(msg)
            | ProfileError::Export(msg)
            | ProfileError::Validation(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 终端）
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

    /// 格式化为简洁输出（用于日志与管道）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ProfileError {}

// 便捷的构造函数
impl ProfileError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        ProfileError::Decode(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        ProfileError::Encode(msg.into())
    }

    pub fn invalid_location_type<T: Into<String>>(msg: T) -> Self {
        ProfileError::InvalidLocationType(msg.into())
    }

    pub fn invalid_yes_no<T: Into<String>>(msg: T) -> Self {
        ProfileError::InvalidYesNo(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ProfileError::FileOperation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        ProfileError::Config(msg.into())
    }

    pub fn export<T: Into<String>>(msg: T) -> Self {
        ProfileError::Export(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ProfileError::Validation(msg.into())
    }
}

impl From<std::io::Error> for ProfileError {
    fn from(err: std::io::Error) -> Self {
        ProfileError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(err: serde_json::Error) -> Self {
        // 数据本身的问题（语法、类型、EOF）都归为解码错误
        if err.is_io() {
            ProfileError::FileOperation(err.to_string())
        } else {
            ProfileError::Decode(err.to_string())
        }
    }
}

impl From<config::ConfigError> for ProfileError {
    fn from(err: config::ConfigError) -> Self {
        ProfileError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for ProfileError {
    fn from(err: toml::ser::Error) -> Self {
        ProfileError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
