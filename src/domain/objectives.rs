//! 学习目标校验
//!
//! 将自由文本的学习目标规范到固定的行为动词词表

/// 受控行为动词（区分大小写的前缀匹配）
pub const ACTION_VERBS: [&str; 6] = [
    "Understand",
    "Explain",
    "Apply",
    "Analyze",
    "Evaluate",
    "Create",
];

/// 缺少行为动词时补上的前缀
const DEFAULT_VERB_PREFIX: &str = "Understand ";

/// 检查目标是否以受控动词开头
#[inline]
fn starts_with_action_verb(objective: &str) -> bool {
    ACTION_VERBS.iter().any(|verb| objective.starts_with(verb))
}

/// 规范化单个学习目标
pub fn normalize_objective(objective: &str) -> String {
    if starts_with_action_verb(objective) {
        objective.to_string()
    } else {
        format!("{}{}", DEFAULT_VERB_PREFIX, objective)
    }
}

/// 规范化一组学习目标
///
/// 保持输入顺序和数量，永不失败
pub fn validate_objectives<S: AsRef<str>>(objectives: &[S]) -> Vec<String> {
    objectives
        .iter()
        .map(|objective| normalize_objective(objective.as_ref()))
        .collect()
}
