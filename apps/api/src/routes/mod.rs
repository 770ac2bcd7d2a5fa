pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::hr::handlers as hr;
use crate::progress::handlers as progress;
use crate::resources::handlers as resources;
use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::techprep::handlers as techprep;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume parsing
        .route("/api/v1/resume/parse", post(resume::handle_parse_resume))
        // TechPrep
        .route("/api/v1/techprep/topics", get(techprep::handle_list_topics))
        .route("/api/v1/techprep/quiz", get(techprep::handle_draw_quiz))
        .route(
            "/api/v1/techprep/quiz/submit",
            post(techprep::handle_submit_quiz),
        )
        // HR coaching
        .route("/api/v1/hr/questions", get(hr::handle_list_questions))
        .route("/api/v1/hr/questions/:id", get(hr::handle_get_question))
        .route(
            "/api/v1/hr/questions/:id/feedback",
            post(hr::handle_answer_feedback),
        )
        // Company resources
        .route(
            "/api/v1/companies/:company/resources",
            get(resources::handle_list_resources)
                .post(resources::handle_upload_resource)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/companies/:company/resources/:file/url",
            get(resources::handle_resource_link),
        )
        // Progress dashboard
        .route("/api/v1/progress", get(progress::handle_progress))
        .with_state(state)
}
