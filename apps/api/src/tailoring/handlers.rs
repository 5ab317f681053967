//! Axum route handlers for resume tailoring and application questions.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::tailoring::documents::{extract_text, UploadedFile};
use crate::tailoring::resume::TailoredResume;
use crate::tailoring::tailor::{answer_questions, tailor_resume, QuestionAnswer};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Fields of the multipart tailoring form. Text fields are trimmed.
#[derive(Debug, Default)]
pub struct TailorForm {
    pub api_key: String,
    pub jd: String,
    pub prompt: String,
    pub prompt_file: Option<UploadedFile>,
    pub resume_text: String,
    pub resume_file: Option<UploadedFile>,
}

#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub success: bool,
    pub data: TailoredResume,
}

#[derive(Debug, Deserialize)]
pub struct AnswerQuestionsRequest {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub questions: String,
    #[serde(default)]
    pub jd: String,
    #[serde(default)]
    pub resume: TailoredResume,
}

#[derive(Debug, Serialize)]
pub struct AnswerQuestionsResponse {
    pub success: bool,
    pub answers: Vec<QuestionAnswer>,
}

impl TailorForm {
    /// Reads every field of the form. File fields without a file name are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = TailorForm::default();

        while let Some(field) = multipart.next_field().await.map_err(invalid_form)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "prompt_file" | "resume_file" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let data = field.bytes().await.map_err(invalid_form)?;
                    if file_name.is_empty() {
                        continue;
                    }
                    let upload = Some(UploadedFile { file_name, data });
                    if name == "prompt_file" {
                        form.prompt_file = upload;
                    } else {
                        form.resume_file = upload;
                    }
                }
                "api_key" | "jd" | "prompt" | "resume_text" => {
                    let value = field.text().await.map_err(invalid_form)?.trim().to_string();
                    match name.as_str() {
                        "api_key" => form.api_key = value,
                        "jd" => form.jd = value,
                        "prompt" => form.prompt = value,
                        _ => form.resume_text = value,
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

fn invalid_form(e: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid form data: {e}"))
}

/// Decodes an uploaded file off the async runtime (PDF extraction is CPU-bound).
async fn decode_upload(file: UploadedFile) -> Result<String, AppError> {
    file.kind()?;
    let text = tokio::task::spawn_blocking(move || extract_text(&file))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("document decoding task failed: {e}")))??;
    Ok(text)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/tailor
///
/// Multipart form: `api_key`, `jd`, `prompt` or `prompt_file`, `resume_text` or `resume_file`.
/// Uploaded files take precedence over their pasted-text counterparts.
pub async fn handle_tailor(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TailorResponse>, AppError> {
    let form = TailorForm::from_multipart(multipart).await?;

    if form.api_key.is_empty() {
        return Err(AppError::Validation(
            "Anthropic API key is required.".to_string(),
        ));
    }

    let prompt = match form.prompt_file {
        Some(file) => decode_upload(file).await?,
        None => form.prompt,
    };
    if prompt.trim().is_empty() {
        return Err(AppError::Validation(
            "Tailoring prompt is required. Upload a file or paste text.".to_string(),
        ));
    }
    if form.jd.is_empty() {
        return Err(AppError::Validation(
            "Job description is required.".to_string(),
        ));
    }

    let mut resume_text = match form.resume_file {
        Some(file) => decode_upload(file).await?,
        None => String::new(),
    };
    if resume_text.trim().is_empty() {
        resume_text = form.resume_text;
    }
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Please upload a resume file or paste resume text.".to_string(),
        ));
    }

    let llm = state.llm(&form.api_key);
    let data = tailor_resume(&llm, &prompt, &resume_text, &form.jd).await?;

    Ok(Json(TailorResponse {
        success: true,
        data,
    }))
}

/// POST /api/answer-questions
///
/// Answers free-form application questions using the tailored resume and the JD as context.
pub async fn handle_answer_questions(
    State(state): State<AppState>,
    Json(request): Json<AnswerQuestionsRequest>,
) -> Result<Json<AnswerQuestionsResponse>, AppError> {
    let api_key = request.api_key.trim();
    let questions = request.questions.trim();
    let jd = request.jd.trim();

    if api_key.is_empty() {
        return Err(AppError::Validation("API key is required.".to_string()));
    }
    if questions.is_empty() {
        return Err(AppError::Validation(
            "Please paste at least one question.".to_string(),
        ));
    }
    if jd.is_empty() {
        return Err(AppError::Validation(
            "Job description context is missing.".to_string(),
        ));
    }

    let llm = state.llm(api_key);
    let answers = answer_questions(&llm, &request.resume, jd, questions).await?;

    Ok(Json(AnswerQuestionsResponse {
        success: true,
        answers,
    }))
}
