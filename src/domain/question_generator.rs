//! 题目生成器
//!
//! 根据测评类型生成模板化题目，纯函数，无随机性

use crate::domain::textbook::{AssessmentType, Difficulty, Question, QuestionKind};

/// 选择题的占位选项
const PLACEHOLDER_OPTIONS: [&str; 4] = ["Option A", "Option B", "Option C", "Option D"];

/// 生成单道题目
///
/// 未识别的测评类型落入开放题
pub fn generate_question(assessment_type: &AssessmentType, question_number: usize) -> Question {
    let (question_text, difficulty, kind) = match assessment_type {
        AssessmentType::Quiz => (
            format!("What is the main concept of section {}?", question_number),
            Difficulty::Medium,
            QuestionKind::MultipleChoice {
                options: PLACEHOLDER_OPTIONS.iter().map(|o| o.to_string()).collect(),
                correct_answer: "A".to_string(),
            },
        ),
        AssessmentType::Test => (
            format!("Explain the key principles of concept {}.", question_number),
            Difficulty::High,
            QuestionKind::ShortAnswer {
                rubric: "Clear explanation with examples".to_string(),
            },
        ),
        AssessmentType::SelfCheck => (
            format!(
                "True or False: Concept {} is correctly described.",
                question_number
            ),
            Difficulty::Easy,
            QuestionKind::TrueFalse {
                correct_answer: "true".to_string(),
            },
        ),
        AssessmentType::Other(_) => (
            format!("Discuss the implications of concept {}.", question_number),
            Difficulty::Medium,
            QuestionKind::OpenEnded {
                guidelines: "Provide detailed analysis".to_string(),
            },
        ),
    };

    Question {
        question_number,
        question_text,
        difficulty,
        kind,
    }
}

/// 生成 count 道题目，编号从 1 开始
pub fn generate_questions(assessment_type: &AssessmentType, count: usize) -> Vec<Question> {
    (1..=count)
        .map(|number| generate_question(assessment_type, number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_question_shape() {
        let q = generate_question(&AssessmentType::Quiz, 3);
        assert_eq!(q.question_number, 3);
        assert_eq!(q.question_text, "What is the main concept of section 3?");
        assert_eq!(q.difficulty, Difficulty::Medium);
        match q.kind {
            QuestionKind::MultipleChoice {
                options,
                correct_answer,
            } => {
                assert_eq!(options, vec!["Option A", "Option B", "Option C", "Option D"]);
                assert_eq!(correct_answer, "A");
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_test_and_self_check_shapes() {
        let q = generate_question(&AssessmentType::Test, 1);
        assert_eq!(q.kind.as_str(), "short_answer");
        assert_eq!(q.difficulty, Difficulty::High);

        let q = generate_question(&AssessmentType::SelfCheck, 1);
        assert_eq!(
            q.kind,
            QuestionKind::TrueFalse {
                correct_answer: "true".to_string()
            }
        );
        assert_eq!(q.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_unknown_type_falls_back_to_open_ended() {
        let q = generate_question(&AssessmentType::from_tag("essay"), 2);
        assert_eq!(q.kind.as_str(), "open_ended");
        assert_eq!(q.question_text, "Discuss the implications of concept 2.");
        assert_eq!(q.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_generation_is_deterministic_and_sequential() {
        let first = generate_questions(&AssessmentType::Quiz, 4);
        let second = generate_questions(&AssessmentType::Quiz, 4);
        assert_eq!(first, second);
        let numbers: Vec<usize> = first.iter().map(|q| q.question_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert!(generate_questions(&AssessmentType::Test, 0).is_empty());
    }
}
