//! Textbook Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    Assessment, Chapter, Metadata, QualityScores, Section, TextbookError, TextbookId,
    TextbookStatus, TocEntry,
};

/// 章节寻址边界
///
/// `Legacy` 沿用历史行为：`chapter >= 章节数` 即越界，因此最后一章不可寻址。
/// `Inclusive` 为修正后的行为：只有 `chapter > 章节数` 才越界。
/// 两种模式下 chapter 0 都越界。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChapterBoundary {
    #[default]
    Legacy,
    Inclusive,
}

impl ChapterBoundary {
    /// 将 1 起始的章节号解析为 0 起始的下标
    pub fn resolve(&self, chapter: usize, chapter_count: usize) -> Result<usize, TextbookError> {
        let out_of_range = match self {
            ChapterBoundary::Legacy => chapter >= chapter_count,
            ChapterBoundary::Inclusive => chapter > chapter_count,
        };
        if chapter == 0 || out_of_range {
            return Err(TextbookError::OutOfRange {
                chapter,
                chapter_count,
            });
        }
        Ok(chapter - 1)
    }
}

/// Textbook 聚合根
///
/// 不变量:
/// - 章节只追加，不重排不删除
/// - 目录与章节一一对应，page_number 等于章节序号
/// - 质量评分每次整体覆盖
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Textbook {
    id: TextbookId,
    metadata: Metadata,
    table_of_contents: Vec<TocEntry>,
    chapters: Vec<Chapter>,
    /// 预留，目前没有操作写入
    learning_objectives: Vec<String>,
    quality_assurance: QualityScores,
    updated_at: DateTime<Utc>,
}

impl Textbook {
    /// 创建新教材（状态为 planning，评分全部为 0）
    pub fn new(metadata: Metadata) -> Self {
        Self {
            id: TextbookId::new(),
            metadata,
            table_of_contents: Vec::new(),
            chapters: Vec::new(),
            learning_objectives: Vec::new(),
            quality_assurance: QualityScores::default(),
            updated_at: Utc::now(),
        }
    }

    /// 追加章节并同步目录
    pub fn append_chapter(&mut self, chapter: Chapter) {
        self.table_of_contents.push(TocEntry {
            chapter_number: chapter.chapter_number(),
            chapter_title: chapter.chapter_title().to_string(),
            page_number: self.chapters.len() + 1,
        });
        self.chapters.push(chapter);
        self.touch();
    }

    /// 按章节号定位章节
    pub fn chapter_mut(
        &mut self,
        chapter: usize,
        boundary: ChapterBoundary,
    ) -> Result<&mut Chapter, TextbookError> {
        let index = boundary.resolve(chapter, self.chapters.len())?;
        Ok(&mut self.chapters[index])
    }

    /// 向指定章节追加小节
    pub fn append_section(
        &mut self,
        chapter: usize,
        boundary: ChapterBoundary,
        section: Section,
    ) -> Result<(), TextbookError> {
        self.chapter_mut(chapter, boundary)?.push_section(section);
        self.touch();
        Ok(())
    }

    /// 向指定章节追加测评（多次调用产生多条测评，不合并）
    pub fn append_assessment(
        &mut self,
        chapter: usize,
        boundary: ChapterBoundary,
        assessment: Assessment,
    ) -> Result<(), TextbookError> {
        self.chapter_mut(chapter, boundary)?.push_assessment(assessment);
        self.touch();
        Ok(())
    }

    /// 覆盖章节小结
    pub fn set_chapter_summary(
        &mut self,
        chapter: usize,
        boundary: ChapterBoundary,
        summary: impl Into<String>,
    ) -> Result<(), TextbookError> {
        self.chapter_mut(chapter, boundary)?.set_summary(summary.into());
        self.touch();
        Ok(())
    }

    pub fn set_status(&mut self, status: TextbookStatus) {
        self.metadata.status = status;
        self.touch();
    }

    /// 写入质量评分，整体覆盖旧值
    pub fn record_quality_scores(&mut self, scores: QualityScores) {
        self.quality_assurance = scores;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    // Getters
    pub fn id(&self) -> &TextbookId {
        &self.id
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    pub fn status(&self) -> TextbookStatus {
        self.metadata.status
    }

    pub fn table_of_contents(&self) -> &[TocEntry] {
        &self.table_of_contents
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn learning_objectives(&self) -> &[String] {
        &self.learning_objectives
    }

    pub fn quality_scores(&self) -> &QualityScores {
        &self.quality_assurance
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::textbook::Difficulty;
    use chrono::NaiveDate;

    fn metadata() -> Metadata {
        Metadata {
            title: "Calculus I".to_string(),
            subject: "Mathematics".to_string(),
            level: "undergraduate".to_string(),
            authors: vec!["A. Author".to_string()],
            edition: "1.0".to_string(),
            language: "en".to_string(),
            created_date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            status: TextbookStatus::Planning,
        }
    }

    fn chapter(number: u32) -> Chapter {
        Chapter::new(number, format!("Chapter {number}"), Vec::new(), "2-3 hours", Vec::new())
    }

    fn section(id: &str) -> Section {
        Section {
            section_id: id.to_string(),
            title: "Intro".to_string(),
            content: "body".to_string(),
            learning_objective: None,
            examples: Vec::new(),
            exercises: Vec::new(),
            key_points: Vec::new(),
            difficulty: Difficulty::Medium,
        }
    }

    #[test]
    fn test_textbook_creation() {
        let textbook = Textbook::new(metadata());

        assert_eq!(textbook.title(), "Calculus I");
        assert_eq!(textbook.status(), TextbookStatus::Planning);
        assert!(textbook.chapters().is_empty());
        assert!(textbook.table_of_contents().is_empty());
        assert_eq!(*textbook.quality_scores(), QualityScores::default());
    }

    #[test]
    fn test_append_chapter_updates_toc() {
        let mut textbook = Textbook::new(metadata());
        textbook.append_chapter(chapter(1));
        textbook.append_chapter(chapter(2));

        let toc = textbook.table_of_contents();
        assert_eq!(toc.len(), 2);
        assert_eq!(toc[1].chapter_number, 2);
        assert_eq!(toc[1].chapter_title, "Chapter 2");
        assert_eq!(toc[1].page_number, 2);
    }

    #[test]
    fn test_legacy_boundary_rejects_last_chapter() {
        assert_eq!(
            ChapterBoundary::Legacy.resolve(1, 1),
            Err(TextbookError::OutOfRange {
                chapter: 1,
                chapter_count: 1
            })
        );
        assert_eq!(ChapterBoundary::Legacy.resolve(1, 2), Ok(0));
        assert!(ChapterBoundary::Legacy.resolve(0, 2).is_err());
        assert!(ChapterBoundary::Legacy.resolve(1, 0).is_err());
    }

    #[test]
    fn test_inclusive_boundary_accepts_last_chapter() {
        assert_eq!(ChapterBoundary::Inclusive.resolve(1, 1), Ok(0));
        assert_eq!(ChapterBoundary::Inclusive.resolve(3, 3), Ok(2));
        assert!(ChapterBoundary::Inclusive.resolve(4, 3).is_err());
        assert!(ChapterBoundary::Inclusive.resolve(0, 3).is_err());
    }

    #[test]
    fn test_append_section_to_addressed_chapter() {
        let mut textbook = Textbook::new(metadata());
        textbook.append_chapter(chapter(1));
        textbook.append_chapter(chapter(2));

        textbook
            .append_section(1, ChapterBoundary::Legacy, section("1.1"))
            .unwrap();

        assert_eq!(textbook.chapters()[0].sections().len(), 1);
        assert!(textbook.chapters()[1].sections().is_empty());

        let err = textbook
            .append_section(2, ChapterBoundary::Legacy, section("2.1"))
            .unwrap_err();
        assert!(matches!(err, TextbookError::OutOfRange { chapter: 2, .. }));
    }

    #[test]
    fn test_set_summary_and_status() {
        let mut textbook = Textbook::new(metadata());
        textbook.append_chapter(chapter(1));
        textbook
            .set_chapter_summary(1, ChapterBoundary::Inclusive, "Covered limits.")
            .unwrap();
        textbook.set_status(TextbookStatus::Review);

        assert_eq!(textbook.chapters()[0].summary(), "Covered limits.");
        assert_eq!(textbook.status(), TextbookStatus::Review);
    }
}
