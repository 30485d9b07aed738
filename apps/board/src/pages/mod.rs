//! Page Router / Mode Dispatcher.
//!
//! Each route names a `PageMode`; `dispatch` builds that mode's view-model.
//! Modes share the job store and the renderer and nothing else.

pub mod apply_flow;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::time::Instant;
use tracing::debug;

use crate::errors::AppError;
use crate::feed::JobFeed;
use crate::jobs::{fetch_jobs, find_job, JobQuery};
use crate::models::JobRecord;
use crate::render;
use crate::storage::VisitorStorage;

pub use apply_flow::{ApplyPanel, PanelParam, PanelReset, SUCCESS_WINDOW};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Employer,
    Candidate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageMode {
    Home,
    Listing(JobQuery),
    Detail(PanelParam),
    Dashboard(DashboardTab),
}

/// Everything a page needs besides its mode.
pub struct PageContext<'a> {
    pub feed: &'a dyn JobFeed,
    pub storage: &'a VisitorStorage,
    pub featured_count: usize,
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub featured: Vec<JobRecord>,
}

#[derive(Debug, Clone)]
pub struct ListingView {
    pub query: JobQuery,
    pub jobs: Vec<JobRecord>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailSelection {
    NoneSelected,
    NotFound(String),
    Found(JobRecord),
}

#[derive(Debug, Clone)]
pub struct DetailView {
    pub selection: DetailSelection,
    pub panel: ApplyPanel,
    /// Set while the success indicator shows; the page reloads into the
    /// scheduled panel state once it elapses.
    pub reset: Option<PanelReset>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppliedJob {
    pub job: JobRecord,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    pub tab: DashboardTab,
    pub posted: Vec<JobRecord>,
    /// Number of application rows stored, including ones whose job no
    /// longer resolves.
    pub applications_recorded: usize,
    pub applied: Vec<AppliedJob>,
}

#[derive(Debug, Clone)]
pub enum Page {
    Home(HomeView),
    Listing(ListingView),
    Detail(DetailView),
    Dashboard(DashboardView),
}

impl Page {
    pub fn render(&self) -> String {
        match self {
            Page::Home(view) => render::cards::home_page(view),
            Page::Listing(view) => render::listing::listing_page(view),
            Page::Detail(view) => render::detail::detail_page(view),
            Page::Dashboard(view) => render::dashboard::dashboard_page(view),
        }
    }
}

pub async fn dispatch(mode: PageMode, ctx: &PageContext<'_>) -> Result<Page, AppError> {
    debug!("Dispatching {:?} for scope {}", mode, ctx.storage.scope());
    let page = match mode {
        PageMode::Home => Page::Home(build_home(ctx).await),
        PageMode::Listing(query) => Page::Listing(build_listing(ctx, query).await),
        PageMode::Detail(panel) => Page::Detail(build_detail(ctx, panel).await?),
        PageMode::Dashboard(tab) => Page::Dashboard(build_dashboard(ctx, tab).await?),
    };
    Ok(page)
}

async fn build_home(ctx: &PageContext<'_>) -> HomeView {
    let mut featured = fetch_jobs(ctx.feed, ctx.storage).await;
    featured.truncate(ctx.featured_count);
    HomeView { featured }
}

async fn build_listing(ctx: &PageContext<'_>, query: JobQuery) -> ListingView {
    let all = fetch_jobs(ctx.feed, ctx.storage).await;
    let jobs = query.apply(&all);
    ListingView {
        query,
        total: all.len(),
        jobs,
    }
}

async fn build_detail(ctx: &PageContext<'_>, param: PanelParam) -> Result<DetailView, AppError> {
    let Some(selected) = ctx.storage.selected_job_id().await? else {
        return Ok(DetailView {
            selection: DetailSelection::NoneSelected,
            panel: ApplyPanel::Hidden,
            reset: None,
        });
    };

    let jobs = fetch_jobs(ctx.feed, ctx.storage).await;
    let Some(job) = find_job(&jobs, &selected) else {
        return Ok(DetailView {
            selection: DetailSelection::NotFound(selected),
            panel: ApplyPanel::Hidden,
            reset: None,
        });
    };

    let now = Instant::now();
    let panel = param.into_panel(now);
    Ok(DetailView {
        selection: DetailSelection::Found(job.clone()),
        reset: panel.scheduled_reset(now),
        panel,
    })
}

async fn build_dashboard(
    ctx: &PageContext<'_>,
    tab: DashboardTab,
) -> Result<DashboardView, AppError> {
    let posted = ctx.storage.posted_jobs().await?;
    let applications = ctx.storage.applications().await?;

    // Applied jobs resolve against a fresh merge; unresolved rows are skipped.
    let applied = if applications.is_empty() {
        Vec::new()
    } else {
        let jobs = fetch_jobs(ctx.feed, ctx.storage).await;
        applications
            .iter()
            .filter_map(|app| {
                find_job(&jobs, &app.job_id).map(|job| AppliedJob {
                    job: job.clone(),
                    applied_at: app.applied_at,
                })
            })
            .collect()
    };

    Ok(DashboardView {
        tab,
        posted,
        applications_recorded: applications.len(),
        applied,
    })
}
