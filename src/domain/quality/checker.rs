//! Quality Context - 检查器

use std::collections::BTreeMap;

use super::{
    basic_checks, AccessibilityRule, CheckLevel, CheckStatus, ContentQualityRule, Finding,
    PedagogyRule, QualityReport, QualityRule, ScoreCategory,
};
use crate::domain::textbook::{QualityScores, Textbook};

/// 满分
const FULL_SCORE: i64 = 100;

/// 评分策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityPolicy {
    /// 每个问题扣的分数
    pub penalty_per_issue: u32,
    /// 每章最少的学习目标数
    pub min_learning_objectives: usize,
}

impl Default for QualityPolicy {
    fn default() -> Self {
        Self {
            penalty_per_issue: 10,
            min_learning_objectives: 2,
        }
    }
}

/// 质量检查器
///
/// 每次运行都完整重算四个分数并覆盖教材上的旧值，
/// 同一教材、同一级别重复运行结果一致
pub struct QualityChecker {
    policy: QualityPolicy,
    rules: Vec<Box<dyn QualityRule>>,
}

impl QualityChecker {
    pub fn new(policy: QualityPolicy) -> Self {
        let rules: Vec<Box<dyn QualityRule>> = vec![
            Box::new(AccessibilityRule),
            Box::new(PedagogyRule {
                min_learning_objectives: policy.min_learning_objectives,
            }),
            Box::new(ContentQualityRule),
        ];
        Self { policy, rules }
    }

    pub fn policy(&self) -> &QualityPolicy {
        &self.policy
    }

    /// 运行质量检查并写回评分
    pub fn run(&self, textbook: &mut Textbook, level: CheckLevel) -> QualityReport {
        let mut detailed_results = BTreeMap::new();
        let mut issues_found = 0;
        let mut status = CheckStatus::Passed;

        // 基础检查总是运行
        let basic = basic_checks(textbook);
        if !basic.is_empty() {
            status = CheckStatus::NeedsImprovement;
        }
        issues_found += basic.len();
        for (key, message) in basic {
            detailed_results.insert(key, Finding::Message(message));
        }

        if level == CheckLevel::Comprehensive {
            let mut comprehensive_issues = 0;
            for rule in &self.rules {
                let issues = rule.evaluate(textbook);
                if issues.is_empty() {
                    continue;
                }
                comprehensive_issues += issues.len();
                detailed_results.insert(rule.category().key().to_string(), Finding::Issues(issues));
            }
            if comprehensive_issues > 0 {
                status = CheckStatus::NeedsImprovement;
            }
            issues_found += comprehensive_issues;
        }

        let scores = self.derive_scores(&detailed_results);
        textbook.record_quality_scores(scores);

        tracing::info!(
            textbook_id = %textbook.id(),
            check_level = %level,
            issues_found = issues_found,
            status = status.as_str(),
            overall_score = scores.overall,
            "Quality checks completed"
        );

        QualityReport {
            status,
            checks_run: level,
            issues_found,
            detailed_results,
            scores,
        }
    }

    /// 由检查结果推导评分
    ///
    /// 键不存在与列表为空等价，均为满分
    fn derive_scores(&self, detailed_results: &BTreeMap<String, Finding>) -> QualityScores {
        let [accessibility, pedagogical, content_quality] = ScoreCategory::ALL.map(|category| {
            let issues = detailed_results
                .get(category.key())
                .map(Finding::issue_count)
                .unwrap_or(0);
            self.category_score(issues)
        });
        QualityScores::from_categories(accessibility, pedagogical, content_quality)
    }

    fn category_score(&self, issue_count: usize) -> f64 {
        let penalty = i64::from(self.policy.penalty_per_issue).saturating_mul(issue_count as i64);
        FULL_SCORE.saturating_sub(penalty).max(0) as f64
    }
}

impl Default for QualityChecker {
    fn default() -> Self {
        Self::new(QualityPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::textbook::{
        Chapter, ChapterBoundary, Difficulty, Metadata, Section, TextbookStatus,
    };
    use chrono::NaiveDate;

    fn textbook() -> Textbook {
        Textbook::new(Metadata {
            title: "Biology".to_string(),
            subject: "Science".to_string(),
            level: "intro".to_string(),
            authors: vec!["C. Darwin".to_string()],
            edition: "1.0".to_string(),
            language: "en".to_string(),
            created_date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            status: TextbookStatus::Planning,
        })
    }

    fn chapter(number: u32, objectives: &[&str]) -> Chapter {
        Chapter::new(
            number,
            format!("Chapter {number}"),
            objectives.iter().map(|o| o.to_string()).collect(),
            "2-3 hours",
            vec!["Basic literacy".to_string()],
        )
    }

    fn section(id: &str, content: &str) -> Section {
        Section {
            section_id: id.to_string(),
            title: "Cells".to_string(),
            content: content.to_string(),
            learning_objective: None,
            examples: Vec::new(),
            exercises: Vec::new(),
            key_points: Vec::new(),
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn test_basic_check_without_chapters() {
        let mut book = textbook();
        let report = QualityChecker::default().run(&mut book, CheckLevel::Basic);

        assert!(report.issues_found >= 1);
        assert_eq!(report.status, CheckStatus::NeedsImprovement);
        assert_eq!(report.checks_run, CheckLevel::Basic);
        assert_eq!(
            report.get("chapters").and_then(Finding::as_message),
            Some("No chapters defined")
        );
        // 基础级别不产生类别键，三项满分
        assert_eq!(book.quality_scores().overall, 100.0);
    }

    #[test]
    fn test_single_objective_costs_ten_pedagogy_points() {
        let mut book = textbook();
        book.append_chapter(chapter(1, &["Understand cells"]));

        let report = QualityChecker::default().run(&mut book, CheckLevel::Comprehensive);

        let pedagogy = report.get("pedagogy").and_then(Finding::as_issues).unwrap();
        assert_eq!(pedagogy, ["Chapter 1 needs more learning objectives"]);
        assert_eq!(book.quality_scores().pedagogical, 90.0);
        assert_eq!(book.quality_scores().accessibility, 100.0);
        assert_eq!(report.status, CheckStatus::NeedsImprovement);
    }

    #[test]
    fn test_empty_section_content_scenario() {
        let mut book = textbook();
        book.append_chapter(chapter(1, &["Understand cells", "Explain mitosis"]));
        book.append_chapter(chapter(2, &["Understand genes", "Apply Mendel"]));
        book.append_section(1, ChapterBoundary::Legacy, section("1.1", "Cells are..."))
            .unwrap();
        book.append_section(1, ChapterBoundary::Legacy, section("1.2", ""))
            .unwrap();

        let report = QualityChecker::default().run(&mut book, CheckLevel::Comprehensive);

        let content = report
            .get("content_quality")
            .and_then(Finding::as_issues)
            .unwrap();
        assert_eq!(content.len(), 1);
        assert!(report.get("pedagogy").is_none());
        assert!(report.get("accessibility").is_none());

        let scores = book.quality_scores();
        assert_eq!(scores.content_quality, 90.0);
        assert_eq!(scores.overall, 96.67);
        assert_eq!(report.issues_found, 1);
    }

    #[test]
    fn test_clean_textbook_passes() {
        let mut book = textbook();
        book.append_chapter(chapter(1, &["Understand cells", "Explain mitosis"]));

        let report = QualityChecker::default().run(&mut book, CheckLevel::Comprehensive);

        assert!(report.passed());
        assert_eq!(report.issues_found, 0);
        assert!(report.detailed_results.is_empty());
        assert_eq!(book.quality_scores().overall, 100.0);
    }

    #[test]
    fn test_scores_floor_at_zero() {
        let mut book = textbook();
        for number in 1..=12 {
            book.append_chapter(chapter(number, &["Understand one"]));
        }

        QualityChecker::default().run(&mut book, CheckLevel::Comprehensive);

        assert_eq!(book.quality_scores().pedagogical, 0.0);
        assert_eq!(book.quality_scores().overall, 66.67);
    }

    #[test]
    fn test_repeated_runs_are_idempotent() {
        let mut book = textbook();
        book.append_chapter(chapter(1, &["Understand cells"]));
        let checker = QualityChecker::default();

        let first = checker.run(&mut book, CheckLevel::Comprehensive);
        let first_scores = *book.quality_scores();
        let second = checker.run(&mut book, CheckLevel::Comprehensive);

        assert_eq!(first, second);
        assert_eq!(first_scores, *book.quality_scores());
    }

    #[test]
    fn test_run_overwrites_previous_scores() {
        let mut book = textbook();
        book.append_chapter(chapter(1, &["Understand cells"]));
        let checker = QualityChecker::default();

        checker.run(&mut book, CheckLevel::Comprehensive);
        assert_eq!(book.quality_scores().pedagogical, 90.0);

        // 基础级别不运行综合规则，教学分回到满分
        checker.run(&mut book, CheckLevel::Basic);
        assert_eq!(book.quality_scores().pedagogical, 100.0);
    }

    #[test]
    fn test_custom_penalty() {
        let mut book = textbook();
        book.append_chapter(chapter(1, &["Understand cells"]));
        let checker = QualityChecker::new(QualityPolicy {
            penalty_per_issue: 25,
            min_learning_objectives: 2,
        });

        checker.run(&mut book, CheckLevel::Comprehensive);
        assert_eq!(book.quality_scores().pedagogical, 75.0);
    }
}
