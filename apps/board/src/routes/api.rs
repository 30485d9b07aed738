//! JSON views over the same pipeline the HTML pages use.

use axum::{
    extract::{Query, State},
    Extension, Json,
};

use crate::errors::AppError;
use crate::jobs::{fetch_jobs, JobQuery};
use crate::models::{ApplicationRecord, JobRecord};
use crate::scope::VisitorScope;
use crate::state::AppState;

/// GET /api/v1/jobs?title=&location=&type=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Extension(scope): Extension<VisitorScope>,
    Query(query): Query<JobQuery>,
) -> Json<Vec<JobRecord>> {
    let storage = state.storage_for(&scope);
    let all = fetch_jobs(state.feed.as_ref(), &storage).await;
    Json(query.apply(&all))
}

/// GET /api/v1/applications
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Extension(scope): Extension<VisitorScope>,
) -> Result<Json<Vec<ApplicationRecord>>, AppError> {
    let applications = state.storage_for(&scope).applications().await?;
    Ok(Json(applications))
}
