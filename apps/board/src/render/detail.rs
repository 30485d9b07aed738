
use v_htmlescape::escape;

use super::{layout, Nav};
use crate::models::JobRecord;
use crate::pages::{ApplyPanel, DetailSelection, DetailView, PanelReset};

fn hidden(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        r#" style="display:none""#
    }
}

/// Full job description plus the Apply trigger.
pub fn job_detail(job: &JobRecord, panel: &ApplyPanel) -> String {
    format!(
        r#"      <h2>{title}</h2>
      <p><strong>{company}</strong> &middot; {location} &middot; <span class="job-type">{job_type}</span></p>
      <h3>Description</h3>
      <p>{description}</p>
      <h3>Qualifications</h3>
      <p>{qualifications}</p>
      <h3>How to Apply</h3>
      <p>{how_to_apply}</p>
      <a id="show-apply-form-btn" class="button" href="/job-details?panel=form"{trigger}>Apply</a>
"#,
        title = escape(&job.title),
        company = escape(&job.company),
        location = escape(&job.location),
        job_type = escape(job.job_type.as_str()),
        description = escape(&job.description),
        qualifications = escape(&job.qualifications),
        how_to_apply = escape(&job.how_to_apply),
        trigger = hidden(panel.apply_trigger_visible()),
    )
}

/// Application form section with its success indicator.
pub fn application_form(panel: &ApplyPanel) -> String {
    format!(
        r#"    <section id="application-form-section"{section}>
      <h3>Apply for this job</h3>
      <div id="application-success"{success}>Application submitted successfully!</div>
      <form id="apply-form" method="post" action="/job-details/apply" enctype="multipart/form-data">
        <label>Name <input id="applicant-name" name="name" required></label>
        <label>Email <input id="applicant-email" name="email" type="email" required></label>
        <label>Resume <input id="applicant-resume" name="resume" type="file"></label>
        <button type="submit">Submit Application</button>
      </form>
    </section>
"#,
        section = hidden(panel.form_visible()),
        success = hidden(panel.success_visible()),
    )
}

/// Reload into the scheduled panel state once the success window has elapsed.
fn reset_refresh(reset: Option<PanelReset>) -> String {
    match reset {
        Some(PanelReset { after, to }) => {
            let secs = (after.as_millis() + 999) / 1000;
            format!(
                r#"<meta http-equiv="refresh" content="{secs};url=/job-details{}">"#,
                to.query()
            )
        }
        None => String::new(),
    }
}

pub fn detail_page(view: &DetailView) -> String {
    let (title, section, form) = match &view.selection {
        DetailSelection::NoneSelected => (
            "Job Details".to_string(),
            "      <p>No job selected.</p>\n".to_string(),
            String::new(),
        ),
        DetailSelection::NotFound(_) => (
            "Job Details".to_string(),
            "      <p>Job not found.</p>\n".to_string(),
            String::new(),
        ),
        DetailSelection::Found(job) => (
            job.title.clone(),
            job_detail(job, &view.panel),
            application_form(&view.panel),
        ),
    };

    let body = format!(
        r#"    <section id="job-detail-section">
{section}    </section>
{form}"#
    );
    layout(&title, Nav::Jobs, &reset_refresh(view.reset), &body)
}
