//! Textbook Creator - 教材构建引擎
//!
//! 显式构造的引擎实例，持有配置和内容模板端口。
//! 所有文档操作原地修改教材并返回同一个引用，便于链式调用。

use std::sync::Arc;

use crate::application::commands::{AddAssessment, AddChapter, AddSection, InitializeTextbook};
use crate::application::error::ApplicationError;
use crate::application::ports::ContentTemplaterPort;
use crate::config::{AppConfig, DefaultsConfig};
use crate::domain::quality::{CheckLevel, QualityChecker, QualityReport};
use crate::domain::textbook::{
    Assessment, Chapter, ChapterBoundary, Metadata, Section, Textbook, TextbookError,
    TextbookStatus,
};
use crate::domain::{generate_questions, validate_objectives};

/// 教材构建引擎
///
/// 不持有任何教材状态，同一教材的并发修改需由调用方串行化
pub struct TextbookCreator {
    defaults: DefaultsConfig,
    boundary: ChapterBoundary,
    default_level: CheckLevel,
    checker: QualityChecker,
    templater: Arc<dyn ContentTemplaterPort>,
}

impl TextbookCreator {
    pub fn new(config: &AppConfig, templater: Arc<dyn ContentTemplaterPort>) -> Self {
        Self {
            defaults: config.defaults.clone(),
            boundary: config.addressing.boundary(),
            default_level: config.quality.check_level(),
            checker: QualityChecker::new(config.quality.policy()),
            templater,
        }
    }

    /// 初始化教材
    ///
    /// 必填字段缺失时返回 MissingParameter，按 title、subject、level、authors 顺序检查；
    /// 无法识别的 status 返回 UnknownStatus
    pub fn initialize_textbook(
        &self,
        command: InitializeTextbook,
    ) -> Result<Textbook, ApplicationError> {
        let title = command
            .title
            .ok_or(TextbookError::MissingParameter("title"))?;
        let subject = command
            .subject
            .ok_or(TextbookError::MissingParameter("subject"))?;
        let level = command
            .level
            .ok_or(TextbookError::MissingParameter("level"))?;
        let authors = command
            .authors
            .ok_or(TextbookError::MissingParameter("authors"))?;
        let status = match command.status {
            Some(tag) => TextbookStatus::from_str(&tag).ok_or(TextbookError::UnknownStatus(tag))?,
            None => TextbookStatus::Planning,
        };

        let metadata = Metadata {
            title,
            subject,
            level,
            authors,
            edition: command
                .edition
                .unwrap_or_else(|| self.defaults.edition.clone()),
            language: command
                .language
                .unwrap_or_else(|| self.defaults.language.clone()),
            created_date: command.created_date.unwrap_or(self.defaults.created_date),
            status,
        };

        let textbook = Textbook::new(metadata);

        tracing::info!(
            textbook_id = %textbook.id(),
            title = %textbook.title(),
            "Textbook initialized"
        );

        Ok(textbook)
    }

    /// 追加章节
    ///
    /// 学习目标先经过规范化；不检查章节号重复或跳号
    pub fn add_chapter<'a>(&self, textbook: &'a mut Textbook, command: AddChapter) -> &'a mut Textbook {
        let objectives = validate_objectives(&command.learning_objectives);
        let duration = command
            .duration
            .unwrap_or_else(|| self.defaults.chapter_duration.clone());

        let chapter = Chapter::new(
            command.chapter_number,
            command.chapter_title,
            objectives,
            duration,
            command.prerequisites,
        )
        .with_key_points(command.key_points);

        textbook.append_chapter(chapter);

        tracing::info!(
            textbook_id = %textbook.id(),
            chapter_number = command.chapter_number,
            chapter_count = textbook.chapter_count(),
            "Chapter added"
        );

        textbook
    }

    /// 追加小节，正文由内容模板生成
    pub fn add_section<'a>(
        &self,
        textbook: &'a mut Textbook,
        command: AddSection,
    ) -> Result<&'a mut Textbook, ApplicationError> {
        let chapter = command.chapter;
        self.check_chapter(textbook, chapter)?;

        let content = self.templater.render(command.content_type, &command);
        let section = Section {
            section_id: command.section,
            title: command.title,
            content,
            learning_objective: command.learning_objective,
            examples: command.examples,
            exercises: command.exercises,
            key_points: command.key_points,
            difficulty: command.difficulty.unwrap_or_default(),
        };

        tracing::debug!(
            textbook_id = %textbook.id(),
            chapter = chapter,
            section_id = %section.section_id,
            content_len = section.content.len(),
            "Section added"
        );

        textbook.append_section(chapter, self.boundary, section)?;
        Ok(textbook)
    }

    /// 追加测评，题目由题目生成器合成
    ///
    /// 重复调用追加新的测评记录，不合并
    pub fn add_assessment<'a>(
        &self,
        textbook: &'a mut Textbook,
        command: AddAssessment,
    ) -> Result<&'a mut Textbook, ApplicationError> {
        let chapter = command.chapter;
        self.check_chapter(textbook, chapter)?;

        let questions = generate_questions(&command.assessment_type, command.questions);
        let assessment = Assessment {
            assessment_type: command.assessment_type,
            questions,
            time_limit: command
                .time_limit
                .unwrap_or_else(|| self.defaults.time_limit.clone()),
            difficulty_distribution: command
                .difficulty
                .unwrap_or_else(|| self.defaults.difficulty_distribution.clone()),
        };

        tracing::debug!(
            textbook_id = %textbook.id(),
            chapter = chapter,
            assessment_type = %assessment.assessment_type,
            questions = assessment.questions.len(),
            "Assessment added"
        );

        textbook.append_assessment(chapter, self.boundary, assessment)?;
        Ok(textbook)
    }

    /// 覆盖章节小结
    pub fn set_chapter_summary<'a>(
        &self,
        textbook: &'a mut Textbook,
        chapter: usize,
        summary: impl Into<String>,
    ) -> Result<&'a mut Textbook, ApplicationError> {
        self.check_chapter(textbook, chapter)?;
        textbook.set_chapter_summary(chapter, self.boundary, summary)?;
        Ok(textbook)
    }

    /// 更新编写状态
    pub fn set_status<'a>(&self, textbook: &'a mut Textbook, status: TextbookStatus) -> &'a mut Textbook {
        textbook.set_status(status);
        tracing::info!(
            textbook_id = %textbook.id(),
            status = %status,
            "Textbook status changed"
        );
        textbook
    }

    /// 运行质量检查，评分写回教材
    pub fn run_quality_checks(&self, textbook: &mut Textbook, level: CheckLevel) -> QualityReport {
        self.checker.run(textbook, level)
    }

    /// 按配置的默认级别运行质量检查
    pub fn run_default_quality_checks(&self, textbook: &mut Textbook) -> QualityReport {
        self.checker.run(textbook, self.default_level)
    }

    fn check_chapter(&self, textbook: &Textbook, chapter: usize) -> Result<(), ApplicationError> {
        if let Err(err) = self.boundary.resolve(chapter, textbook.chapter_count()) {
            tracing::warn!(
                textbook_id = %textbook.id(),
                chapter = chapter,
                chapter_count = textbook.chapter_count(),
                "Chapter number out of range"
            );
            return Err(err.into());
        }
        Ok(())
    }
}
