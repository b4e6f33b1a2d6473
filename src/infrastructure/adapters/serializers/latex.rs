//! LaTeX Serializer
//!
//! 生成 book 文档类的 LaTeX 源文件，小节正文放入 verbatim 环境

use crate::application::ports::{SerializerError, TextbookSerializerPort};
use crate::domain::textbook::{Assessment, Chapter, Section, Textbook};

/// LaTeX 序列化器
#[derive(Debug, Clone, Default)]
pub struct LatexSerializer;

impl LatexSerializer {
    pub fn new() -> Self {
        Self
    }

    fn preamble(textbook: &Textbook) -> String {
        let metadata = textbook.metadata();
        format!(
            "\\documentclass[12pt]{{book}}\n\
             \\usepackage[utf8]{{inputenc}}\n\
             \\usepackage{{hyperref}}\n\
             \\title{{{}}}\n\
             \\author{{{}}}\n\
             \\date{{{}}}\n\
             \\begin{{document}}\n\
             \\maketitle\n\
             \\tableofcontents\n",
            escape(&metadata.title),
            escape(&metadata.authors.join(", ")),
            metadata.created_date.format("%Y-%m-%d"),
        )
    }

    fn chapter(chapter: &Chapter) -> String {
        let mut out = format!(
            "\n\\chapter{{{}}}\n\n\\section*{{Learning Objectives}}\n",
            escape(chapter.chapter_title())
        );

        if !chapter.learning_objectives().is_empty() {
            out.push_str("\\begin{itemize}\n");
            for objective in chapter.learning_objectives() {
                out.push_str(&format!("  \\item {}\n", escape(objective)));
            }
            out.push_str("\\end{itemize}\n");
        }

        for section in chapter.sections() {
            out.push_str(&Self::section(section));
        }

        let summary = if chapter.summary().is_empty() {
            format!(
                "This chapter covered the key concepts of {}.",
                chapter.chapter_title()
            )
        } else {
            chapter.summary().to_string()
        };
        out.push_str(&format!("\n\\section*{{Summary}}\n{}\n", escape(&summary)));

        if !chapter.assessments().is_empty() {
            out.push_str("\n\\section*{Assessment}\n");
            for assessment in chapter.assessments() {
                out.push_str(&Self::assessment(assessment));
            }
        }

        out
    }

    fn section(section: &Section) -> String {
        let mut out = format!(
            "\n\\subsection{{{}}}\n\n\\textbf{{Learning Objective:}} {}\n\n\\begin{{verbatim}}\n{}\n\\end{{verbatim}}\n",
            escape(&section.title),
            escape(section.learning_objective.as_deref().unwrap_or_default()),
            verbatim_safe(&section.content),
        );

        if !section.examples.is_empty() {
            out.push_str("\n\\subsubsection*{Examples}\n");
            for example in &section.examples {
                out.push_str(&format!("\n\\textbf{{Example:}} {}\n", escape(example)));
            }
        }

        if !section.exercises.is_empty() {
            out.push_str("\n\\subsubsection*{Exercises}\n");
            for exercise in &section.exercises {
                out.push_str(&format!("\n\\textbf{{Exercise:}} {}\n", escape(exercise)));
            }
        }

        out
    }

    fn assessment(assessment: &Assessment) -> String {
        let mut out = format!(
            "\n\\textbf{{Assessment Type:}} {} ({})\n",
            escape(assessment.assessment_type.as_str()),
            escape(&assessment.time_limit)
        );

        for question in &assessment.questions {
            out.push_str(&format!(
                "\n\\textbf{{Question {}:}} {}\n",
                question.question_number,
                escape(&question.question_text)
            ));
            if let Some(options) = question.kind.options() {
                out.push_str("\\begin{enumerate}\n");
                for option in options {
                    out.push_str(&format!("  \\item {}\n", escape(option)));
                }
                out.push_str("\\end{enumerate}\n");
            }
        }

        out
    }
}

impl TextbookSerializerPort for LatexSerializer {
    fn serialize(&self, textbook: &Textbook) -> Result<String, SerializerError> {
        let mut latex = Self::preamble(textbook);
        for chapter in textbook.chapters() {
            latex.push_str(&Self::chapter(chapter));
        }
        latex.push_str("\n\\end{document}\n");
        Ok(latex)
    }
}

/// verbatim 环境只认精确的 `\end{verbatim}`，插入空格使其失效
fn verbatim_safe(text: &str) -> String {
    text.replace("\\end{verbatim}", "\\end {verbatim}")
}

/// 转义 LaTeX 特殊字符
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::textbook::{ChapterBoundary, Difficulty};
    use crate::infrastructure::adapters::serializers::fixtures::sample_textbook;

    #[test]
    fn test_document_structure() {
        let latex = LatexSerializer::new().serialize(&sample_textbook()).unwrap();

        assert!(latex.starts_with("\\documentclass[12pt]{book}"));
        assert!(latex.contains("\\title{Signals \\& Systems}"));
        assert!(latex.contains("\\author{A. Oppenheim, A. Willsky}"));
        assert!(latex.contains("\\date{2026-03-01}"));
        assert!(latex.contains("\\chapter{Fourier Series}"));
        assert!(latex.contains("\\chapter{Sampling}"));
        assert!(latex.trim_end().ends_with("\\end{document}"));
    }

    #[test]
    fn test_chapter_body() {
        let latex = LatexSerializer::new().serialize(&sample_textbook()).unwrap();

        assert!(latex.contains("  \\item Understand periodic signals"));
        assert!(latex.contains("\\subsection{Harmonics <intro>}"));
        assert!(latex.contains("\\textbf{Learning Objective:} Explain 50\\% duty cycles"));
        assert!(latex.contains("\\begin{verbatim}\n## Section 1.1: Harmonics\n\\end{verbatim}"));
        assert!(latex.contains("\\textbf{Example:} Square wave"));
        assert!(latex.contains("\\textbf{Exercise:} Sawtooth wave"));
        assert!(latex.contains("Periodic signals decompose."));
    }

    #[test]
    fn test_missing_summary_falls_back() {
        let latex = LatexSerializer::new().serialize(&sample_textbook()).unwrap();
        assert!(latex.contains("This chapter covered the key concepts of Sampling."));
    }

    #[test]
    fn test_assessment_options_enumerated() {
        let latex = LatexSerializer::new().serialize(&sample_textbook()).unwrap();

        assert!(latex.contains("\\textbf{Assessment Type:} quiz (60 minutes)"));
        assert!(latex.contains("\\textbf{Question 2:} What is the main concept of section 2?"));
        assert!(latex.contains("\\begin{enumerate}\n  \\item Option A\n"));
    }

    #[test]
    fn test_section_content_cannot_close_verbatim() {
        let mut textbook = sample_textbook();
        textbook
            .append_section(
                2,
                ChapterBoundary::Inclusive,
                Section {
                    section_id: "2.1".to_string(),
                    title: "Aliasing".to_string(),
                    content: "## Section 2.1: \\end{verbatim}\\input{/etc/passwd}".to_string(),
                    learning_objective: None,
                    examples: Vec::new(),
                    exercises: Vec::new(),
                    key_points: Vec::new(),
                    difficulty: Difficulty::Medium,
                },
            )
            .unwrap();

        let latex = LatexSerializer::new().serialize(&textbook).unwrap();
        assert!(!latex.contains("\\end{verbatim}\\input"));
        assert!(latex.contains("\\end {verbatim}\\input{/etc/passwd}\n\\end{verbatim}"));
        assert_eq!(latex.matches("\\begin{verbatim}").count(), 2);
        assert_eq!(latex.matches("\\end{verbatim}").count(), 2);
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("a_b & c"), "a\\_b \\& c");
        assert_eq!(escape("x^2 ~ 100%"), "x\\textasciicircum{}2 \\textasciitilde{} 100\\%");
        assert_eq!(escape("C:\\"), "C:\\textbackslash{}");
    }
}
