pub mod api;
pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};

use crate::scope::ensure_scope;
use crate::state::AppState;

/// Upper bound for an application upload. Resumes are not stored, but the
/// whole multipart body still has to stream through.
pub const APPLY_BODY_LIMIT: usize = 32 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(pages::handle_home))
        .route("/jobs", get(pages::handle_listing))
        .route("/jobs/select", post(pages::handle_select_job))
        .route("/job-details", get(pages::handle_job_details))
        .route(
            "/job-details/apply",
            post(pages::handle_apply).layer(DefaultBodyLimit::max(APPLY_BODY_LIMIT)),
        )
        .route("/dashboard", get(pages::handle_dashboard))
        .route("/dashboard/jobs", post(pages::handle_post_job))
        // JSON API
        .route("/api/v1/jobs", get(api::handle_list_jobs))
        .route("/api/v1/applications", get(api::handle_list_applications))
        .fallback(pages::handle_not_found)
        .layer(from_fn(ensure_scope))
        .route("/health", get(health::health_handler))
        .with_state(state)
}
