//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（textbook.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;
use crate::domain::quality::CheckLevel;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["textbook", "textbook.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TEXTBOOK_`，层级分隔符 `__`）
/// 2. 配置文件（textbook.toml 或 textbook.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TEXTBOOK_QUALITY__DEFAULT_LEVEL=comprehensive`
/// - `TEXTBOOK_QUALITY__PENALTY_PER_ISSUE=5`
/// - `TEXTBOOK_EXPORT__OUTPUT_DIR=/data/export`
/// - `TEXTBOOK_ADDRESSING__LEGACY_LAST_CHAPTER_GUARD=false`
///
/// # 返回
/// - `Ok(AppConfig)` - 成功加载的配置
/// - `Err(ConfigError)` - 加载失败
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("defaults.edition", "1.0")?
        .set_default("defaults.language", "en")?
        .set_default("defaults.created_date", "2026-02-14")?
        .set_default("defaults.chapter_duration", "2-3 hours")?
        .set_default("defaults.time_limit", "60 minutes")?
        .set_default("defaults.difficulty_distribution", "balanced")?
        .set_default("addressing.legacy_last_chapter_guard", true)?
        .set_default("quality.default_level", "basic")?
        .set_default("quality.penalty_per_issue", 10)?
        .set_default("quality.min_learning_objectives", 2)?
        .set_default("export.output_dir", "output")?
        .set_default("export.default_format", "pdf")?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: TEXTBOOK_
    // 层级分隔符: __ (双下划线)
    // 注意: 环境变量名会被转换为小写
    builder = builder.add_source(
        Environment::with_prefix("TEXTBOOK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 验证扣分范围
    if !(1..=100).contains(&config.quality.penalty_per_issue) {
        return Err(ConfigError::ValidationError(format!(
            "Penalty per issue must be between 1 and 100, got {}",
            config.quality.penalty_per_issue
        )));
    }

    // 验证检查级别
    if CheckLevel::from_str(&config.quality.default_level).is_none() {
        return Err(ConfigError::ValidationError(format!(
            "Unknown quality check level: {}",
            config.quality.default_level
        )));
    }

    // 验证默认版次
    if config.defaults.edition.is_empty() {
        return Err(ConfigError::ValidationError(
            "Default edition cannot be empty".to_string(),
        ));
    }

    // 验证导出配置
    if config.export.output_dir.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Export output directory cannot be empty".to_string(),
        ));
    }
    if config.export.format().is_none() {
        return Err(ConfigError::ValidationError(format!(
            "Unsupported default export format: {}",
            config.export.default_format
        )));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Default Edition: {}", config.defaults.edition);
    tracing::info!("Default Language: {}", config.defaults.language);
    tracing::info!("Default Created Date: {}", config.defaults.created_date);
    tracing::info!(
        "Legacy Last Chapter Guard: {}",
        config.addressing.legacy_last_chapter_guard
    );
    tracing::info!("Quality Level: {}", config.quality.default_level);
    tracing::info!("Penalty Per Issue: {}", config.quality.penalty_per_issue);
    tracing::info!(
        "Min Learning Objectives: {}",
        config.quality.min_learning_objectives
    );
    tracing::info!("Export Directory: {:?}", config.export.output_dir);
    tracing::info!("Export Format: {}", config.export.default_format);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.defaults.edition, "1.0");
        assert_eq!(config.quality.penalty_per_issue, 10);
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_zero_penalty() {
        let mut config = AppConfig::default();
        config.quality.penalty_per_issue = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_unknown_level() {
        let mut config = AppConfig::default();
        config.quality.default_level = "thorough".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_unsupported_format() {
        let mut config = AppConfig::default();
        config.export.default_format = "epub".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[quality]\ndefault_level = \"comprehensive\"\npenalty_per_issue = 5\n\n[addressing]\nlegacy_last_chapter_guard = false"
        )
        .unwrap();

        let config = load_config_from_path(Some(file.path())).unwrap();
        assert_eq!(config.quality.check_level(), CheckLevel::Comprehensive);
        assert_eq!(config.quality.penalty_per_issue, 5);
        assert!(!config.addressing.legacy_last_chapter_guard);
        assert_eq!(config.defaults.language, "en");
        assert_eq!(config.defaults.time_limit, "60 minutes");
    }
}
