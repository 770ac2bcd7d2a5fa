use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::progress::dashboard::{compute_progress_report, ProgressReport};
use crate::state::AppState;
use crate::techprep::store::list_attempts;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/progress?user_id=
pub async fn handle_progress(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProgressReport>, AppError> {
    let attempts = list_attempts(&state.db, params.user_id).await?;
    Ok(Json(compute_progress_report(
        &attempts,
        Utc::now().date_naive(),
    )))
}
