//! Configuration Types
//!
//! 定义所有配置结构体

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

use crate::application::ports::ExportFormat;
use crate::domain::quality::{CheckLevel, QualityPolicy};
use crate::domain::textbook::ChapterBoundary;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 教材默认值
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// 章节寻址配置
    #[serde(default)]
    pub addressing: AddressingConfig,

    /// 质量检查配置
    #[serde(default)]
    pub quality: QualityConfig,

    /// 导出配置
    #[serde(default)]
    pub export: ExportConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 教材默认值（初始化、添加章节、添加测评时填充缺省字段）
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_edition")]
    pub edition: String,

    #[serde(default = "default_language")]
    pub language: String,

    /// 未提供创建日期时使用的占位日期
    #[serde(default = "default_created_date")]
    pub created_date: NaiveDate,

    #[serde(default = "default_chapter_duration")]
    pub chapter_duration: String,

    #[serde(default = "default_time_limit")]
    pub time_limit: String,

    #[serde(default = "default_difficulty_distribution")]
    pub difficulty_distribution: String,
}

fn default_edition() -> String {
    "1.0".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_created_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 14).unwrap_or_default()
}

fn default_chapter_duration() -> String {
    "2-3 hours".to_string()
}

fn default_time_limit() -> String {
    "60 minutes".to_string()
}

fn default_difficulty_distribution() -> String {
    "balanced".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            edition: default_edition(),
            language: default_language(),
            created_date: default_created_date(),
            chapter_duration: default_chapter_duration(),
            time_limit: default_time_limit(),
            difficulty_distribution: default_difficulty_distribution(),
        }
    }
}

/// 章节寻址配置
#[derive(Debug, Clone, Deserialize)]
pub struct AddressingConfig {
    /// 沿用历史边界：章节号等于章节数时视为越界
    /// 关闭后最后一章可以寻址
    #[serde(default = "default_legacy_guard")]
    pub legacy_last_chapter_guard: bool,
}

fn default_legacy_guard() -> bool {
    true
}

impl Default for AddressingConfig {
    fn default() -> Self {
        Self {
            legacy_last_chapter_guard: default_legacy_guard(),
        }
    }
}

impl AddressingConfig {
    pub fn boundary(&self) -> ChapterBoundary {
        if self.legacy_last_chapter_guard {
            ChapterBoundary::Legacy
        } else {
            ChapterBoundary::Inclusive
        }
    }
}

/// 质量检查配置
#[derive(Debug, Clone, Deserialize)]
pub struct QualityConfig {
    /// 默认检查级别
    /// 可选: basic, comprehensive
    #[serde(default = "default_check_level")]
    pub default_level: String,

    /// 每个问题扣分
    #[serde(default = "default_penalty")]
    pub penalty_per_issue: u32,

    /// 每章最少学习目标数
    #[serde(default = "default_min_objectives")]
    pub min_learning_objectives: usize,
}

fn default_check_level() -> String {
    "basic".to_string()
}

fn default_penalty() -> u32 {
    10
}

fn default_min_objectives() -> usize {
    2
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            default_level: default_check_level(),
            penalty_per_issue: default_penalty(),
            min_learning_objectives: default_min_objectives(),
        }
    }
}

impl QualityConfig {
    /// 解析默认检查级别，无法识别时退回 basic
    pub fn check_level(&self) -> CheckLevel {
        CheckLevel::from_str(&self.default_level).unwrap_or_default()
    }

    pub fn policy(&self) -> QualityPolicy {
        QualityPolicy {
            penalty_per_issue: self.penalty_per_issue,
            min_learning_objectives: self.min_learning_objectives,
        }
    }
}

/// 导出配置
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// 导出目录
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// 默认导出格式
    /// 可选: pdf, latex, html, json
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_format() -> String {
    "pdf".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_format: default_format(),
        }
    }
}

impl ExportConfig {
    pub fn format(&self) -> Option<ExportFormat> {
        ExportFormat::from_str(&self.default_format)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
