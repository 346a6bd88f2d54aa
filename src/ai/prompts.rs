//! Query expansion prompts
//!
//! Both prompts ground the model in the legal-term dictionary:
//! - Similar questions: exactly 3 paraphrases reusing dictionary vocabulary
//! - Key terms: up to 5 terms picked from the dictionary
//!
//! Builders are pure; the same `(query, terms)` always renders the same string.

// =============================================================================
// CONSTANTS
// =============================================================================

/// Only the head of the dictionary is sent to the model
pub const MAX_PROMPT_TERMS: usize = 200;

const TERM_SEPARATOR: &str = ", ";

// =============================================================================
// PROMPT BUILDERS
// =============================================================================

/// Build the prompt asking for three paraphrased questions
pub fn build_similar_questions_prompt(query: &str, terms: &[String]) -> String {
    format!(
        r#"# 역할
당신은 관세법 전문가입니다. 사용자의 질문을 분석하여 유사한 질문을 생성하는 역할을 합니다.

# 작업
사용자 질문과 동일한 의도를 가진 유사질문 3개를 생성하세요.

# 제약사항
1. 반드시 아래 '법률 용어 목록'에서 관련 용어를 선택하여 사용하세요
2. 유사질문은 원래 질문과 의도는 같지만 표현 방식을 다르게 해야 합니다
3. 각 질문은 한 줄로 작성하세요
4. 번호나 불릿 없이 질문만 작성하세요
5. 정확히 3개의 질문만 생성하세요

# 법률 용어 목록
{terms}

# 사용자 질문
{query}

# 출력 형식 (예시)
질문1
질문2
질문3

위 형식으로 3개 질문만 출력하세요."#,
        terms = join_prompt_terms(terms),
        query = query,
    )
}

/// Build the prompt asking for at most five key terms
pub fn build_key_terms_prompt(query: &str, terms: &[String]) -> String {
    format!(
        r#"# 역할
당신은 관세법 전문가입니다. 사용자의 질문에서 핵심 법률 용어를 추출하는 역할을 합니다.

# 작업
사용자 질문에서 핵심이 되는 법률 용어를 추출하세요.

# 제약사항
1. 아래 '법률 용어 목록'을 참고하여 관련 용어를 선택하세요
2. 사용자 질문과 직접 관련된 용어만 선택하세요
3. 최대 5개까지 선택하세요 (적어도 2-3개는 선택하세요)
4. 각 용어는 한 줄에 하나씩 작성하세요
5. 번호나 불릿, 설명 없이 용어만 작성하세요

# 법률 용어 목록
{terms}

# 사용자 질문
{query}

# 출력 형식 (예시)
용어1
용어2
용어3

위 형식으로 핵심 용어만 출력하세요. 반드시 2개 이상 선택하세요."#,
        terms = join_prompt_terms(terms),
        query = query,
    )
}

/// Join the first [`MAX_PROMPT_TERMS`] terms with ", "
fn join_prompt_terms(terms: &[String]) -> String {
    let head = &terms[..terms.len().min(MAX_PROMPT_TERMS)];
    head.join(TERM_SEPARATOR)
}
