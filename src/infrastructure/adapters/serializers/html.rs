//! HTML Serializer
//!
//! 生成独立的 HTML 文档，所有文本都经过转义

use crate::application::ports::{SerializerError, TextbookSerializerPort};
use crate::domain::textbook::{Chapter, Textbook};

/// HTML 序列化器
#[derive(Debug, Clone, Default)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    fn head(textbook: &Textbook) -> String {
        let metadata = textbook.metadata();
        format!(
            "<!DOCTYPE html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n<header>\n<h1>{}</h1>\n<p class=\"authors\">{}</p>\n<p class=\"meta\">{} &middot; {} &middot; Edition {} &middot; {}</p>\n</header>\n",
            escape(&metadata.language),
            escape(&metadata.title),
            escape(&metadata.title),
            escape(&metadata.authors.join(", ")),
            escape(&metadata.subject),
            escape(&metadata.level),
            escape(&metadata.edition),
            metadata.created_date.format("%Y-%m-%d"),
        )
    }

    fn table_of_contents(textbook: &Textbook) -> String {
        let mut out = String::from("<nav>\n<h2>Contents</h2>\n<ol>\n");
        for entry in textbook.table_of_contents() {
            out.push_str(&format!(
                "<li><a href=\"#chapter-{}\">{}</a></li>\n",
                entry.page_number,
                escape(&entry.chapter_title)
            ));
        }
        out.push_str("</ol>\n</nav>\n");
        out
    }

    fn chapter(position: usize, chapter: &Chapter) -> String {
        let mut out = format!(
            "<section class=\"chapter\" id=\"chapter-{}\">\n<h2>Chapter {}: {}</h2>\n",
            position,
            chapter.chapter_number(),
            escape(chapter.chapter_title())
        );

        if !chapter.learning_objectives().is_empty() {
            out.push_str("<h3>Learning Objectives</h3>\n<ul>\n");
            for objective in chapter.learning_objectives() {
                out.push_str(&format!("<li>{}</li>\n", escape(objective)));
            }
            out.push_str("</ul>\n");
        }

        // section_id 不保证唯一，锚点由章节位置和小节下标组成
        for (index, section) in chapter.sections().iter().enumerate() {
            out.push_str(&format!(
                "<article class=\"section\" id=\"section-{}-{}\" data-section-id=\"{}\">\n<h3>{}</h3>\n",
                position,
                index + 1,
                escape(&section.section_id),
                escape(&section.title)
            ));
            if let Some(objective) = &section.learning_objective {
                out.push_str(&format!(
                    "<p><strong>Learning Objective:</strong> {}</p>\n",
                    escape(objective)
                ));
            }
            out.push_str(&format!("<pre>{}</pre>\n</article>\n", escape(&section.content)));
        }

        if !chapter.summary().is_empty() {
            out.push_str(&format!(
                "<h3>Summary</h3>\n<p>{}</p>\n",
                escape(chapter.summary())
            ));
        }

        for assessment in chapter.assessments() {
            out.push_str(&format!(
                "<div class=\"assessment\">\n<h3>Assessment: {}</h3>\n<p>Time limit: {}</p>\n<ol>\n",
                escape(assessment.assessment_type.as_str()),
                escape(&assessment.time_limit)
            ));
            for question in &assessment.questions {
                out.push_str(&format!("<li>{}", escape(&question.question_text)));
                if let Some(options) = question.kind.options() {
                    out.push_str("\n<ol type=\"A\">\n");
                    for option in options {
                        out.push_str(&format!("<li>{}</li>\n", escape(option)));
                    }
                    out.push_str("</ol>\n");
                }
                out.push_str("</li>\n");
            }
            out.push_str("</ol>\n</div>\n");
        }

        out.push_str("</section>\n");
        out
    }
}

impl TextbookSerializerPort for HtmlSerializer {
    fn serialize(&self, textbook: &Textbook) -> Result<String, SerializerError> {
        let mut html = Self::head(textbook);
        html.push_str(&Self::table_of_contents(textbook));
        for (index, chapter) in textbook.chapters().iter().enumerate() {
            html.push_str(&Self::chapter(index + 1, chapter));
        }
        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
