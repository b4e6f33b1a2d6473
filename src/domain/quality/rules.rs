//! Quality Context - 检查规则

use crate::domain::textbook::Textbook;

/// 评分类别，每个类别对应一个综合规则的结果键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreCategory {
    Accessibility,
    Pedagogical,
    ContentQuality,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 3] = [
        ScoreCategory::Accessibility,
        ScoreCategory::Pedagogical,
        ScoreCategory::ContentQuality,
    ];

    /// detailed_results 中的键
    pub fn key(&self) -> &'static str {
        match self {
            ScoreCategory::Accessibility => "accessibility",
            ScoreCategory::Pedagogical => "pedagogy",
            ScoreCategory::ContentQuality => "content_quality",
        }
    }
}

/// 综合检查规则
pub trait QualityRule: Send + Sync {
    /// 规则所属的评分类别
    fn category(&self) -> ScoreCategory;

    /// 对教材求值，返回问题描述列表
    fn evaluate(&self, textbook: &Textbook) -> Vec<String>;
}

/// 可访问性：语言声明与先修要求
pub struct AccessibilityRule;

impl QualityRule for AccessibilityRule {
    fn category(&self) -> ScoreCategory {
        ScoreCategory::Accessibility
    }

    fn evaluate(&self, textbook: &Textbook) -> Vec<String> {
        let mut issues = Vec::new();

        if textbook.metadata().language.is_empty() {
            issues.push("Missing language specification in metadata".to_string());
        }

        for chapter in textbook.chapters() {
            if chapter.prerequisites().is_empty() {
                issues.push(format!(
                    "Chapter {} missing prerequisites",
                    chapter.chapter_number()
                ));
            }
        }

        issues
    }
}

/// 教学设计：每章学习目标数量
pub struct PedagogyRule {
    pub min_learning_objectives: usize,
}

impl Default for PedagogyRule {
    fn default() -> Self {
        Self {
            min_learning_objectives: 2,
        }
    }
}

impl QualityRule for PedagogyRule {
    fn category(&self) -> ScoreCategory {
        ScoreCategory::Pedagogical
    }

    fn evaluate(&self, textbook: &Textbook) -> Vec<String> {
        textbook
            .chapters()
            .iter()
            .filter(|chapter| chapter.learning_objectives().len() < self.min_learning_objectives)
            .map(|chapter| {
                format!(
                    "Chapter {} needs more learning objectives",
                    chapter.chapter_number()
                )
            })
            .collect()
    }
}

/// 内容质量：小节正文非空
pub struct ContentQualityRule;

impl QualityRule for ContentQualityRule {
    fn category(&self) -> ScoreCategory {
        ScoreCategory::ContentQuality
    }

    fn evaluate(&self, textbook: &Textbook) -> Vec<String> {
        let mut issues = Vec::new();

        for chapter in textbook.chapters() {
            for section in chapter.sections() {
                if section.content.is_empty() {
                    issues.push(format!(
                        "Section {} in chapter {} has no content",
                        section.section_id,
                        chapter.chapter_number()
                    ));
                }
            }
        }

        issues
    }
}

/// 基础检查
///
/// 返回 (键, 消息) 列表，每一项计一个问题
pub fn basic_checks(textbook: &Textbook) -> Vec<(String, String)> {
    let mut results = Vec::new();
    let metadata = textbook.metadata();

    let required = [
        ("title", metadata.title.is_empty()),
        ("subject", metadata.subject.is_empty()),
        ("level", metadata.level.is_empty()),
        ("authors", metadata.authors.is_empty()),
    ];
    for (field, missing) in required {
        if missing {
            results.push((
                format!("metadata_{}", field),
                "Missing required field".to_string(),
            ));
        }
    }

    if textbook.chapters().is_empty() {
        results.push(("chapters".to_string(), "No chapters defined".to_string()));
        return results;
    }

    for (i, chapter) in textbook.chapters().iter().enumerate() {
        if chapter.chapter_title().is_empty() {
            results.push((
                format!("chapter_{}_title", i + 1),
                "Missing chapter title".to_string(),
            ));
        }
        if chapter.learning_objectives().is_empty() {
            results.push((
                format!("chapter_{}_objectives", i + 1),
                "Missing learning objectives".to_string(),
            ));
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::textbook::{
        Chapter, ChapterBoundary, Difficulty, Metadata, Section, TextbookStatus,
    };
    use chrono::NaiveDate;

    fn textbook(language: &str) -> Textbook {
        Textbook::new(Metadata {
            title: "Physics".to_string(),
            subject: "Science".to_string(),
            level: "high school".to_string(),
            authors: vec!["R. Feynman".to_string()],
            edition: "1.0".to_string(),
            language: language.to_string(),
            created_date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            status: TextbookStatus::Planning,
        })
    }

    fn chapter(number: u32, objectives: &[&str], prerequisites: &[&str]) -> Chapter {
        Chapter::new(
            number,
            format!("Chapter {number}"),
            objectives.iter().map(|o| o.to_string()).collect(),
            "2-3 hours",
            prerequisites.iter().map(|p| p.to_string()).collect(),
        )
    }

    #[test]
    fn test_basic_checks_empty_chapters() {
        let results = basic_checks(&textbook("en"));
        assert_eq!(
            results,
            vec![("chapters".to_string(), "No chapters defined".to_string())]
        );
    }

    #[test]
    fn test_basic_checks_flag_metadata_and_chapter_fields() {
        let mut book = Textbook::new(Metadata {
            title: String::new(),
            subject: "Science".to_string(),
            level: "high school".to_string(),
            authors: Vec::new(),
            edition: "1.0".to_string(),
            language: "en".to_string(),
            created_date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            status: TextbookStatus::Planning,
        });
        book.append_chapter(Chapter::new(1, "", Vec::new(), "1 hour", Vec::new()));

        let keys: Vec<String> = basic_checks(&book).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "metadata_title",
                "metadata_authors",
                "chapter_1_title",
                "chapter_1_objectives"
            ]
        );
    }

    #[test]
    fn test_accessibility_rule() {
        let mut book = textbook("");
        book.append_chapter(chapter(1, &["Understand a"], &[]));
        book.append_chapter(chapter(2, &["Understand b"], &["Chapter 1"]));

        let issues = AccessibilityRule.evaluate(&book);
        assert_eq!(
            issues,
            vec![
                "Missing language specification in metadata",
                "Chapter 1 missing prerequisites"
            ]
        );
    }

    #[test]
    fn test_pedagogy_rule_threshold() {
        let mut book = textbook("en");
        book.append_chapter(chapter(1, &["Understand a"], &[]));
        book.append_chapter(chapter(2, &["Understand a", "Apply b"], &[]));

        let issues = PedagogyRule::default().evaluate(&book);
        assert_eq!(issues, vec!["Chapter 1 needs more learning objectives"]);

        let strict = PedagogyRule {
            min_learning_objectives: 3,
        };
        assert_eq!(strict.evaluate(&book).len(), 2);
    }

    #[test]
    fn test_content_quality_rule() {
        let mut book = textbook("en");
        book.append_chapter(chapter(1, &[], &[]));
        book.append_chapter(chapter(2, &[], &[]));
        for (id, content) in [("1.1", "text"), ("1.2", "")] {
            book.append_section(
                1,
                ChapterBoundary::Legacy,
                Section {
                    section_id: id.to_string(),
                    title: "T".to_string(),
                    content: content.to_string(),
                    learning_objective: None,
                    examples: Vec::new(),
                    exercises: Vec::new(),
                    key_points: Vec::new(),
                    difficulty: Difficulty::Easy,
                },
            )
            .unwrap();
        }

        let issues = ContentQualityRule.evaluate(&book);
        assert_eq!(issues, vec!["Section 1.2 in chapter 1 has no content"]);
    }
}
