//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::resume::extractor::ExtractionResult;
use crate::resume::form::ResumeForm;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub extraction: ExtractionResult,
    pub form: ResumeForm,
}

/// POST /api/v1/resume/parse
///
/// Locates resume sections in already-extracted text and returns the
/// pre-filled form the client edits before saving.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let extraction = state.extractor.extract(&request.raw_text)?;
    let form = ResumeForm::from_extraction(&extraction);

    info!(
        confidence = extraction.confidence,
        missing = extraction.warnings.len(),
        "Parsed resume text"
    );

    Ok(Json(ParseResumeResponse { extraction, form }))
}
