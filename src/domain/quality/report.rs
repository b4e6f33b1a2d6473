//! Quality Context - 检查报告

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::textbook::QualityScores;

/// 检查级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckLevel {
    /// 只运行基础检查
    #[default]
    Basic,
    /// 基础检查 + 三组综合规则
    Comprehensive,
}

impl CheckLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckLevel::Basic => "basic",
            CheckLevel::Comprehensive => "comprehensive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(CheckLevel::Basic),
            "comprehensive" => Some(CheckLevel::Comprehensive),
            _ => None,
        }
    }
}

impl std::fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 整体结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    NeedsImprovement,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "passed",
            CheckStatus::NeedsImprovement => "needs_improvement",
        }
    }
}

/// 单个检查键下的结果
///
/// 基础检查产出单条消息，综合规则产出问题列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Finding {
    Message(String),
    Issues(Vec<String>),
}

impl Finding {
    /// 该键计入的问题数
    pub fn issue_count(&self) -> usize {
        match self {
            Finding::Message(_) => 1,
            Finding::Issues(issues) => issues.len(),
        }
    }

    pub fn as_message(&self) -> Option<&str> {
        match self {
            Finding::Message(message) => Some(message),
            Finding::Issues(_) => None,
        }
    }

    pub fn as_issues(&self) -> Option<&[String]> {
        match self {
            Finding::Message(_) => None,
            Finding::Issues(issues) => Some(issues),
        }
    }
}

/// 质量检查报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub status: CheckStatus,
    pub checks_run: CheckLevel,
    pub issues_found: usize,
    pub detailed_results: BTreeMap<String, Finding>,
    /// 本次运行写回教材的评分
    pub scores: QualityScores,
}

impl QualityReport {
    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }

    pub fn get(&self, key: &str) -> Option<&Finding> {
        self.detailed_results.get(key)
    }
}
