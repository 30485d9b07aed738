use v_htmlescape::escape;

use super::listing::type_options;
use super::{layout, Nav};
use crate::models::JobRecord;
use crate::pages::{AppliedJob, DashboardTab, DashboardView};

fn summary_card(job: &JobRecord, extra: &str) -> String {
    format!(
        r#"        <div class="job-card">
          <h4>{title}</h4>
          <p><strong>{company}</strong></p>
          <p>{location} &middot; <span class="job-type">{job_type}</span></p>
{extra}        </div>
"#,
        title = escape(&job.title),
        company = escape(&job.company),
        location = escape(&job.location),
        job_type = escape(job.job_type.as_str()),
        extra = extra,
    )
}

pub fn posted_jobs_list(posted: &[JobRecord]) -> String {
    if posted.is_empty() {
        return "        <p>No jobs posted yet.</p>\n".to_string();
    }
    posted.iter().map(|job| summary_card(job, "")).collect()
}

/// Applied jobs. `recorded` counts stored rows; when rows exist but none
/// resolve, the list is simply empty.
pub fn applied_jobs_list(recorded: usize, applied: &[AppliedJob]) -> String {
    if recorded == 0 {
        return "        <p>No jobs applied yet.</p>\n".to_string();
    }
    applied
        .iter()
        .map(|entry| {
            let when = format!(
                "          <p><em>Applied on: {}</em></p>\n",
                entry.applied_at.format("%Y-%m-%d")
            );
            summary_card(&entry.job, &when)
        })
        .collect()
}

fn add_job_form() -> String {
    format!(
        r#"      <form id="add-job-form" method="post" action="/dashboard/jobs">
        <label>Title <input id="job-title" name="title" required></label>
        <label>Company <input id="job-company" name="company" required></label>
        <label>Location <input id="job-location" name="location" required></label>
        <label>Type <select id="job-type" name="type">{options}</select></label>
        <label>Description <textarea id="job-description" name="description"></textarea></label>
        <label>Qualifications <textarea id="job-qualifications" name="qualifications"></textarea></label>
        <label>How to Apply <textarea id="job-how-to-apply" name="how_to_apply"></textarea></label>
        <button type="submit">Post Job</button>
      </form>
"#,
        options = type_options("", "Select type"),
    )
}

pub fn dashboard_page(view: &DashboardView) -> String {
    let employer_active = view.tab == DashboardTab::Employer;
    let tab_class = |active: bool| if active { r#" class="active""# } else { "" };
    let display = |active: bool| {
        if active {
            ""
        } else {
            r#" style="display:none""#
        }
    };

    let body = format!(
        r#"    <h2>Dashboard</h2>
    <nav class="tabs">
      <a id="employer-tab" href="/dashboard?tab=employer"{employer_tab}>Employer</a>
      <a id="candidate-tab" href="/dashboard?tab=candidate"{candidate_tab}>Candidate</a>
    </nav>
    <section id="employer-dashboard"{employer_display}>
      <h3>Post a Job</h3>
{form}      <h3>Your Posted Jobs</h3>
      <div id="posted-jobs-list">
{posted}      </div>
    </section>
    <section id="candidate-dashboard"{candidate_display}>
      <h3>Your Applications</h3>
      <div id="applied-jobs-list">
{applied}      </div>
    </section>
"#,
        employer_tab = tab_class(employer_active),
        candidate_tab = tab_class(!employer_active),
        employer_display = display(employer_active),
        candidate_display = display(!employer_active),
        form = add_job_form(),
        posted = posted_jobs_list(&view.posted),
        applied = applied_jobs_list(view.applications_recorded, &view.applied),
    );
    layout("Dashboard", Nav::Dashboard, "", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::models::{JobId, JobType};

    fn job(title: &str) -> JobRecord {
        JobRecord {
            id: Some(JobId(3)),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Berlin".to_string(),
            job_type: JobType::Internship,
            description: String::new(),
            qualifications: String::new(),
            how_to_apply: String::new(),
        }
    }

    fn view(tab: DashboardTab) -> DashboardView {
        DashboardView {
            tab,
            posted: vec![],
            applications_recorded: 0,
            applied: vec![],
        }
    }

    #[test]
    fn test_empty_dashboard_messages() {
        let html = dashboard_page(&view(DashboardTab::Employer));
        assert!(html.contains("No jobs posted yet."));
        assert!(html.contains("No jobs applied yet."));
    }

    #[test]
    fn test_employer_tab_is_default_visible() {
        let html = dashboard_page(&view(DashboardTab::Employer));
        assert!(html.contains(r#"<section id="employer-dashboard">"#));
        assert!(html.contains(r#"<section id="candidate-dashboard" style="display:none">"#));
        assert!(html.contains(r#"id="employer-tab" href="/dashboard?tab=employer" class="active""#));
    }

    #[test]
    fn test_candidate_tab_visible() {
        let html = dashboard_page(&view(DashboardTab::Candidate));
        assert!(html.contains(r#"<section id="employer-dashboard" style="display:none">"#));
        assert!(html.contains(r#"<section id="candidate-dashboard">"#));
    }

    #[test]
    fn test_applied_list_shows_date() {
        let applied = vec![AppliedJob {
            job: job("Intern"),
            applied_at: Utc.with_ymd_and_hms(2024, 2, 29, 10, 0, 0).unwrap(),
        }];
        let html = applied_jobs_list(1, &applied);
        assert!(html.contains("Applied on: 2024-02-29"));
        assert!(html.contains("<h4>Intern</h4>"));
    }

    #[test]
    fn test_unresolved_applications_render_nothing() {
        assert_eq!(applied_jobs_list(2, &[]), "");
    }

    #[test]
    fn test_posted_list_escapes() {
        let html = posted_jobs_list(&[job("<i>x</i>")]);
        assert!(!html.contains("<i>"));
    }
}
