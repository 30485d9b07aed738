use v_htmlescape::escape;

use super::cards::{job_cards, CardStyle};
use super::{layout, Nav};
use crate::models::{JobRecord, JobType};
use crate::pages::ListingView;

/// Cards for the listing, or the empty-result message.
pub fn job_list(jobs: &[JobRecord]) -> String {
    if jobs.is_empty() {
        return "    <p>No jobs found.</p>\n".to_string();
    }
    job_cards(jobs, CardStyle::Standard)
}

/// `<option>`s for a type selector. `leading` is the blank first entry.
pub fn type_options(selected: &str, leading: &str) -> String {
    let mut html = format!(r#"<option value="">{}</option>"#, escape(leading));
    for job_type in JobType::KNOWN.iter() {
        let value = job_type.as_str();
        let attr = if value == selected { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{value}"{attr}>{label}</option>"#,
            value = escape(value),
            label = escape(job_type.label()),
        ));
    }
    html
}

pub fn listing_page(view: &ListingView) -> String {
    let query = &view.query;
    let summary = if query.is_empty() {
        format!("{} job(s)", view.total)
    } else {
        format!("{} of {} job(s)", view.jobs.len(), view.total)
    };

    // Enter in a text field submits the form; the selector submits on change.
    let body = format!(
        r#"    <h2>Jobs</h2>
    <form class="search" method="get" action="/jobs">
      <input id="search-title" name="title" placeholder="Job title" value="{title}">
      <input id="search-location" name="location" placeholder="Location" value="{location}">
      <select id="search-type" name="type" onchange="this.form.submit()">{options}</select>
      <button id="search-btn" type="submit">Search</button>
    </form>
    <p class="summary">{summary}</p>
    <div id="jobs-list">
{list}    </div>
"#,
        title = escape(&query.title),
        location = escape(&query.location),
        options = type_options(query.job_type.trim(), "All types"),
        summary = escape(&summary),
        list = job_list(&view.jobs),
    );
    layout("Jobs", Nav::Jobs, "", &body)
}
