//! Human-readable output formatting

use crate::expand::ExpansionResult;

/// Format a result for human consumption
pub fn format(result: &ExpansionResult) -> String {
    let mut output = String::new();

    output.push_str("원본 질문:\n");
    output.push_str(&format!("  {}\n\n", result.original_query()));

    output.push_str(&format!(
        "유사질문 ({}개):\n",
        result.similar_questions().len()
    ));
    for (i, question) in result.similar_questions().iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, question));
    }
    output.push('\n');

    output.push_str(&format!("핵심어 ({}개):\n", result.key_terms().len()));
    if result.key_terms().is_empty() {
        output.push_str("  (없음)\n");
    }
    for term in result.key_terms() {
        output.push_str(&format!("  - {}\n", term));
    }
    output.push('\n');

    output.push_str(&format!(
        "총 키워드 그룹: {}개 (원본 1개 + 유사질문 {}개 + 핵심어 {}개)\n",
        result.keyword_group().len(),
        result.similar_questions().len(),
        result.key_terms().len()
    ));

    output
}
