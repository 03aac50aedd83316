use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Result;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 环境变量前缀（`DP__LOGGING__LEVEL=debug`）
pub const ENV_PREFIX: &str = "DP";

/// 静态配置（从 TOML 加载，启动时使用）
///
/// 包含：
/// - logging: 日志配置
/// - export: TypeScript 声明导出配置
/// - codec: JSON 输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StaticConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub codec: CodecConfig,
}

impl StaticConfig {
    /// 从 TOML 文件和环境变量加载配置
    ///
    /// 优先级：ENV > 配置文件 > 默认值
    /// `path` 为 `None` 时读取可选的 `config.toml`，否则文件必须存在
    /// ENV 前缀：DP，分隔符：__
    /// 示例：DP__EXPORT__OUTPUT=web/src/types.ts
    pub fn load(path: Option<&str>) -> Result<Self> {
        use config::{Config, Environment, File};

        // 显式指定的文件必须存在，默认位置的文件可缺省
        let required = path.is_some();
        let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

        let settings = Config::builder()
            // 1. 从 TOML 文件加载
            .add_source(File::with_name(path).required(required))
            // 2. 从环境变量覆盖
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<StaticConfig>()?;
        if std::path::Path::new(path).exists() {
            debug!("Configuration loaded from: {}", path);
        }
        Ok(config)
    }

    /// 生成示例 TOML 配置文件
    pub fn generate_sample_config() -> String {
        let sample_config = Self::default();
        toml::to_string_pretty(&sample_config)
            .unwrap_or_else(|e| format!("Error generating sample config: {}", e))
    }

    /// 保存配置到 TOML 文件
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
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

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// "text" 或 "json"
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_max_backups")]
    pub max_backups: u32,
    #[serde(default = "default_enable_rotation")]
    pub enable_rotation: bool,
}

/// TypeScript 导出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_output")]
    pub output: String,
    #[serde(default = "default_banner")]
    pub banner: bool,
}

/// JSON 输出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

// ============================================================
// Default value functions
// ============================================================

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_max_backups() -> u32 {
    5
}

fn default_enable_rotation() -> bool {
    false
}

fn default_export_output() -> String {
    "web/src/interface.generated.ts".to_string()
}

fn default_banner() -> bool {
    true
}

fn default_pretty() -> bool {
    true
}

// ============================================================
// Default implementations
// ============================================================

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
            max_backups: default_max_backups(),
            enable_rotation: default_enable_rotation(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: default_export_output(),
            banner: default_banner(),
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}
