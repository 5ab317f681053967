//! Resume tailoring and application-question answering. Both are single LLM
//! round-trips; everything here is prompt assembly and reply parsing.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::llm_client::prompts::{compose_prompt, fill_template, JSON_ONLY_INSTRUCTION};
use crate::llm_client::{LlmClient, LlmError};
use crate::tailoring::prompts::{
    ANSWER_MAX_TOKENS, ANSWER_PROMPT_TEMPLATE, ANSWER_SYSTEM, TAILOR_MAX_TOKENS,
    TAILOR_PROMPT_TEMPLATE,
};
use crate::tailoring::resume::TailoredResume;

/// One answered application question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

/// Builds the tailoring prompt: the caller's instructions followed by resume, JD and output schema.
pub fn build_tailor_prompt(instructions: &str, resume_text: &str, jd_text: &str) -> String {
    let user = fill_template(
        TAILOR_PROMPT_TEMPLATE,
        &[
            ("json_only", JSON_ONLY_INSTRUCTION),
            ("resume_text", resume_text),
            ("jd_text", jd_text),
        ],
    );
    compose_prompt(instructions, &user)
}

pub fn build_answer_prompt(resume: &TailoredResume, jd_text: &str, questions: &str) -> String {
    let resume_text = resume.to_context_text();
    let user = fill_template(
        ANSWER_PROMPT_TEMPLATE,
        &[
            ("json_only", JSON_ONLY_INSTRUCTION),
            ("resume_text", &resume_text),
            ("jd_text", jd_text),
            ("questions", questions),
        ],
    );
    compose_prompt(ANSWER_SYSTEM, &user)
}

pub async fn tailor_resume(
    llm: &LlmClient,
    instructions: &str,
    resume_text: &str,
    jd_text: &str,
) -> Result<TailoredResume, LlmError> {
    info!(
        "Tailoring resume ({} chars) against JD ({} chars)",
        resume_text.len(),
        jd_text.len()
    );
    let prompt = build_tailor_prompt(instructions, resume_text, jd_text);
    llm.call_json(&prompt, TAILOR_MAX_TOKENS).await
}

pub async fn answer_questions(
    llm: &LlmClient,
    resume: &TailoredResume,
    jd_text: &str,
    questions: &str,
) -> Result<Vec<QuestionAnswer>, LlmError> {
    let prompt = build_answer_prompt(resume, jd_text, questions);
    llm.call_json(&prompt, ANSWER_MAX_TOKENS).await
}
