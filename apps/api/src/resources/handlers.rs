//! Axum route handlers for the company resource library.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::resources::library::{
    download_link, list_resources, upload_resource, ResourceLink, ResourceObject,
};
use crate::resources::ResourceError;
use crate::state::AppState;

/// GET /api/v1/companies/:company/resources
pub async fn handle_list_resources(
    State(state): State<AppState>,
    Path(company): Path<String>,
) -> Result<Json<Vec<ResourceObject>>, AppError> {
    let resources = list_resources(state.resources.as_ref(), &company).await?;
    Ok(Json(resources))
}

/// POST /api/v1/companies/:company/resources
///
/// Multipart upload; the PDF goes in the `file` field.
pub async fn handle_upload_resource(
    State(state): State<AppState>,
    Path(company): Path<String>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ResourceObject>), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, &state, "Malformed multipart body"))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("file field has no file name".to_string()))?;
        let body = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, &state, "Failed to read upload"))?;

        let resource = upload_resource(
            state.resources.as_ref(),
            &company,
            &file_name,
            body,
            state.config.max_upload_bytes,
        )
        .await?;
        return Ok((StatusCode::CREATED, Json(resource)));
    }

    Err(AppError::Validation(
        "multipart body must contain a 'file' field".to_string(),
    ))
}

/// Bodies cut off by the request size limit surface as stream errors; report
/// them as the same oversize failure a file just over the limit gets.
fn multipart_error(err: MultipartError, state: &AppState, context: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ResourceError::TooLarge {
            max: state.config.max_upload_bytes,
        }
        .into();
    }
    AppError::Validation(format!("{context}: {}", err.body_text()))
}

/// GET /api/v1/companies/:company/resources/:file/url
///
/// Returns a time-limited download link.
pub async fn handle_resource_link(
    State(state): State<AppState>,
    Path((company, file)): Path<(String, String)>,
) -> Result<Json<ResourceLink>, AppError> {
    let link = download_link(
        state.resources.as_ref(),
        &company,
        &file,
        state.config.presign_ttl,
    )
    .await?;
    Ok(Json(link))
}
