//! Markdown Templater - Markdown 小节正文模板
//!
//! 实现 ContentTemplaterPort trait，纯字符串拼接

use crate::application::commands::AddSection;
use crate::application::ports::{ContentTemplaterPort, ContentType};

/// 模板配置
#[derive(Debug, Clone)]
pub struct MarkdownTemplaterConfig {
    /// 未指定时生成的例题数量
    pub default_examples: usize,
    /// 未指定时生成的练习数量
    pub default_exercises: usize,
}

impl Default for MarkdownTemplaterConfig {
    fn default() -> Self {
        Self {
            default_examples: 2,
            default_exercises: 3,
        }
    }
}

/// Markdown 模板
pub struct MarkdownTemplater {
    config: MarkdownTemplaterConfig,
}

const DEFAULT_OBJECTIVE: &str = "Understand key concepts related to this section.";
const DEFAULT_CONCEPTS: [&str; 3] = ["Basic principle", "Advanced principle", "Application"];
const DEFAULT_KEY_POINTS: [&str; 3] = ["Important point 1", "Important point 2", "Important point 3"];

impl MarkdownTemplater {
    pub fn new(config: MarkdownTemplaterConfig) -> Self {
        Self { config }
    }

    fn header(params: &AddSection) -> String {
        format!("## Section {}: {}\n", params.section, params.title)
    }

    fn objective(params: &AddSection) -> &str {
        params
            .learning_objective
            .as_deref()
            .filter(|o| !o.is_empty())
            .unwrap_or(DEFAULT_OBJECTIVE)
    }

    fn render_main(&self, params: &AddSection) -> String {
        let mut out = Self::header(params);

        out.push_str("\n### Learning Objective\n");
        out.push_str(Self::objective(params));
        out.push('\n');

        out.push_str(&format!(
            "\n### Content\nThis section covers {} in detail. The key concepts include:\n\n",
            params.title
        ));
        for (i, fallback) in DEFAULT_CONCEPTS.iter().enumerate() {
            let concept = params.concepts.get(i).map(String::as_str).unwrap_or(fallback);
            out.push_str(&format!("- Concept {}: {}\n", i + 1, concept));
        }

        out.push_str("\n### Key Points\n");
        for (i, fallback) in DEFAULT_KEY_POINTS.iter().enumerate() {
            let point = params.key_points.get(i).map(String::as_str).unwrap_or(fallback);
            out.push_str(&format!("- [ ] {}\n", point));
        }

        out.push_str("\n### Examples\n");
        out.push_str(&self.examples(params));
        out.push_str("\n\n### Practice Exercises\n");
        out.push_str(&self.exercises(params));
        out.push('\n');
        out
    }

    fn render_example(&self, params: &AddSection) -> String {
        let mut out = Self::header(params);
        out.push_str("\n### Worked Examples\n");
        out.push_str(&self.examples(params));
        out.push('\n');
        out
    }

    fn render_exercise(&self, params: &AddSection) -> String {
        let mut out = Self::header(params);
        out.push_str("\n### Practice Exercises\n");
        out.push_str(&self.exercises(params));
        out.push('\n');
        out
    }

    fn render_assessment(&self, params: &AddSection) -> String {
        let mut out = Self::header(params);
        out.push_str("\n### Review Questions\n");
        out.push_str(&format!("1. Summarize {} in your own words.\n", params.title));
        out.push_str(&format!(
            "2. How does this section support the objective: {}\n",
            Self::objective(params)
        ));
        for (i, point) in params.key_points.iter().enumerate() {
            out.push_str(&format!("{}. Explain why \"{}\" matters.\n", i + 3, point));
        }
        out
    }

    fn render_general(&self, params: &AddSection) -> String {
        let mut out = Self::header(params);
        out.push_str(&format!(
            "\nThis section introduces {}.\n\n**Objective:** {}\n",
            params.title,
            Self::objective(params)
        ));
        out
    }

    /// 例题块，调用方提供的例题优先，不足时用占位
    fn examples(&self, params: &AddSection) -> String {
        let count = params.num_examples.unwrap_or(self.config.default_examples);
        (0..count)
            .map(|i| {
                let problem = params
                    .examples
                    .get(i)
                    .map(String::as_str)
                    .unwrap_or("Describe a typical problem for this concept.");
                format!(
                    "#### Example {}\n**Problem:** {}\n\n**Solution:**\n```\nStep-by-step solution would go here.\n```\n\n**Key Takeaway:** Main lesson from this example.",
                    i + 1,
                    problem
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// 练习块，前一半为 Easy，其余为 Challenging
    fn exercises(&self, params: &AddSection) -> String {
        let count = params.num_exercises.unwrap_or(self.config.default_exercises);
        (0..count)
            .map(|i| {
                let difficulty = if i * 2 < count { "Easy" } else { "Challenging" };
                let problem = params
                    .exercises
                    .get(i)
                    .map(String::as_str)
                    .unwrap_or("Describe an exercise problem here.");
                format!(
                    "**Exercise {} ({}):**\n{}\n\n**Hint:** Provide a helpful hint.\n\n**Solution:**\nProvide solution guidance.",
                    i + 1,
                    difficulty,
                    problem
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for MarkdownTemplater {
    fn default() -> Self {
        Self::new(MarkdownTemplaterConfig::default())
    }
}

impl ContentTemplaterPort for MarkdownTemplater {
    fn render(&self, content_type: ContentType, params: &AddSection) -> String {
        match content_type {
            ContentType::Main => self.render_main(params),
            ContentType::Example => self.render_example(params),
            ContentType::Exercise => self.render_exercise(params),
            ContentType::Assessment => self.render_assessment(params),
            ContentType::General => self.render_general(params),
        }
    }
}
