//! Serializer Adapters - 教材导出序列化实现
//!
//! - `LatexSerializer`: LaTeX 源文件（pdf 与 latex 格式共用）
//! - `HtmlSerializer`: 独立 HTML 文档
//! - `JsonSerializer`: 聚合的 JSON 表示

mod html;
mod json;
mod latex;

pub use html::HtmlSerializer;
pub use json::JsonSerializer;
pub use latex::LatexSerializer;

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::NaiveDate;

    use crate::domain::generate_questions;
    use crate::domain::textbook::{
        Assessment, AssessmentType, Chapter, ChapterBoundary, Difficulty, Metadata, Section,
        Textbook, TextbookStatus,
    };

    /// 两章的示例教材，第一章含小节、小结和测验
    pub fn sample_textbook() -> Textbook {
        let mut textbook = Textbook::new(Metadata {
            title: "Signals & Systems".to_string(),
            subject: "Engineering".to_string(),
            level: "undergraduate".to_string(),
            authors: vec!["A. Oppenheim".to_string(), "A. Willsky".to_string()],
            edition: "2.0".to_string(),
            language: "en".to_string(),
            created_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            status: TextbookStatus::Drafting,
        });

        textbook.append_chapter(Chapter::new(
            1,
            "Fourier Series",
            vec!["Understand periodic signals".to_string()],
            "2-3 hours",
            Vec::new(),
        ));
        textbook.append_chapter(Chapter::new(
            2,
            "Sampling",
            vec!["Apply the sampling theorem".to_string()],
            "2-3 hours",
            Vec::new(),
        ));

        textbook
            .append_section(
                1,
                ChapterBoundary::Inclusive,
                Section {
                    section_id: "1.1".to_string(),
                    title: "Harmonics <intro>".to_string(),
                    content: "## Section 1.1: Harmonics".to_string(),
                    learning_objective: Some("Explain 50% duty cycles".to_string()),
                    examples: vec!["Square wave".to_string()],
                    exercises: vec!["Sawtooth wave".to_string()],
                    key_points: Vec::new(),
                    difficulty: Difficulty::Medium,
                },
            )
            .unwrap();
        textbook
            .set_chapter_summary(1, ChapterBoundary::Inclusive, "Periodic signals decompose.")
            .unwrap();
        textbook
            .append_assessment(
                1,
                ChapterBoundary::Inclusive,
                Assessment {
                    assessment_type: AssessmentType::Quiz,
                    questions: generate_questions(&AssessmentType::Quiz, 2),
                    time_limit: "60 minutes".to_string(),
                    difficulty_distribution: "balanced".to_string(),
                },
            )
            .unwrap();

        textbook
    }
}
