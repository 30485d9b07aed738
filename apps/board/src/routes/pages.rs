//! HTML route handlers. Every page goes through `pages::dispatch`; form posts
//! record through `jobs::recorder` and redirect back to a page.

use axum::{
    extract::{Multipart, Query, State},
    response::{Html, Redirect},
    Extension, Form,
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::jobs::{post_job, record_application, JobQuery};
use crate::models::{ApplicationDraft, JobDraft};
use crate::pages::{dispatch, DashboardTab, PageMode, PanelParam};
use crate::scope::VisitorScope;
use crate::state::AppState;

async fn render_page(
    state: &AppState,
    scope: &VisitorScope,
    mode: PageMode,
) -> Result<Html<String>, AppError> {
    let storage = state.storage_for(scope);
    let page = dispatch(mode, &state.page_context(&storage)).await?;
    Ok(Html(page.render()))
}

/// GET /
pub async fn handle_home(
    State(state): State<AppState>,
    Extension(scope): Extension<VisitorScope>,
) -> Result<Html<String>, AppError> {
    render_page(&state, &scope, PageMode::Home).await
}

/// GET /jobs?title=&location=&type=
pub async fn handle_listing(
    State(state): State<AppState>,
    Extension(scope): Extension<VisitorScope>,
    Query(query): Query<JobQuery>,
) -> Result<Html<String>, AppError> {
    render_page(&state, &scope, PageMode::Listing(query)).await
}

#[derive(Debug, Deserialize)]
pub struct SelectJobForm {
    pub id: String,
}

/// POST /jobs/select
///
/// Remembers the job behind a "View Details" click, then opens the detail page.
pub async fn handle_select_job(
    State(state): State<AppState>,
    Extension(scope): Extension<VisitorScope>,
    Form(form): Form<SelectJobForm>,
) -> Result<Redirect, AppError> {
    if form.id.trim().is_empty() {
        return Err(AppError::Validation("No job id was given".to_string()));
    }
    state.storage_for(&scope).select_job(&form.id).await?;
    Ok(Redirect::to("/job-details"))
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    #[serde(default)]
    pub panel: PanelParam,
}

/// GET /job-details?panel=form|submitted
pub async fn handle_job_details(
    State(state): State<AppState>,
    Extension(scope): Extension<VisitorScope>,
    Query(params): Query<DetailParams>,
) -> Result<Html<String>, AppError> {
    render_page(&state, &scope, PageMode::Detail(params.panel)).await
}

/// POST /job-details/apply (multipart)
///
/// Records an application against the selected job. Only the resume's
/// filename is kept; its content is drained and dropped chunk by chunk.
pub async fn handle_apply(
    State(state): State<AppState>,
    Extension(scope): Extension<VisitorScope>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let storage = state.storage_for(&scope);
    let mut draft = ApplicationDraft::default();

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("name") => draft.name = field.text().await?,
            Some("email") => draft.email = field.text().await?,
            Some("resume") => {
                draft.resume = field
                    .file_name()
                    .map(str::to_string)
                    .filter(|name| !name.trim().is_empty());
                while field.chunk().await?.is_some() {}
            }
            _ => {}
        }
    }

    let Some(job_id) = storage.selected_job_id().await? else {
        warn!(
            "Application submitted without a selected job in scope {}",
            storage.scope()
        );
        return Ok(Redirect::to("/job-details"));
    };

    record_application(&storage, &job_id, draft, state.clock.as_ref()).await?;
    Ok(Redirect::to("/job-details?panel=submitted"))
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    #[serde(default)]
    pub tab: DashboardTab,
}

/// GET /dashboard?tab=employer|candidate
pub async fn handle_dashboard(
    State(state): State<AppState>,
    Extension(scope): Extension<VisitorScope>,
    Query(params): Query<DashboardParams>,
) -> Result<Html<String>, AppError> {
    render_page(&state, &scope, PageMode::Dashboard(params.tab)).await
}

/// POST /dashboard/jobs
pub async fn handle_post_job(
    State(state): State<AppState>,
    Extension(scope): Extension<VisitorScope>,
    Form(draft): Form<JobDraft>,
) -> Result<Redirect, AppError> {
    let storage = state.storage_for(&scope);
    post_job(&storage, draft, state.clock.as_ref()).await?;
    Ok(Redirect::to("/dashboard?tab=employer"))
}

/// Fallback for unknown paths.
pub async fn handle_not_found() -> AppError {
    AppError::NotFound("The page you asked for does not exist".to_string())
}
