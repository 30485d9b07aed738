use v_htmlescape::escape;

use super::{layout, Nav};
use crate::models::JobRecord;
use crate::pages::HomeView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    Featured,
    Standard,
}

/// One job summary with a "View Details" control that selects the job.
pub fn job_card(job: &JobRecord, style: CardStyle) -> String {
    let id = job.id.map(|id| id.to_string()).unwrap_or_default();
    let featured = match style {
        CardStyle::Featured => " featured",
        CardStyle::Standard => "",
    };

    format!(
        r#"    <div class="job-card{featured}" data-id="{id}">
      <h3>{title}</h3>
      <p><strong>{company}</strong></p>
      <p>{location} &middot; <span class="job-type">{job_type}</span></p>
      <form method="post" action="/jobs/select">
        <input type="hidden" name="id" value="{id}">
        <button class="view-job-btn" type="submit" data-id="{id}">View Details</button>
      </form>
    </div>
"#,
        featured = featured,
        id = escape(&id),
        title = escape(&job.title),
        company = escape(&job.company),
        location = escape(&job.location),
        job_type = escape(job.job_type.as_str()),
    )
}

pub fn job_cards(jobs: &[JobRecord], style: CardStyle) -> String {
    jobs.iter().map(|job| job_card(job, style)).collect()
}

pub fn home_page(view: &HomeView) -> String {
    let cards = if view.featured.is_empty() {
        "    <p>No jobs available right now.</p>\n".to_string()
    } else {
        job_cards(&view.featured, CardStyle::Featured)
    };

    let body = format!(
        r#"    <section class="featured-jobs">
      <h2>Featured Jobs</h2>
      <div id="featured-jobs-list">
{cards}      </div>
      <p><a href="/jobs">Browse all jobs</a></p>
    </section>
"#
    );
    layout("Home", Nav::Home, "", &body)
}
