//! View Renderer — HTML for every page, built with `format!`.
//!
//! Every record field goes through `escape` before interpolation. Posted jobs
//! and applications are visitor input and may contain markup.

pub mod cards;
pub mod dashboard;
pub mod detail;
pub mod listing;

use axum::http::StatusCode;
use v_htmlescape::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Home,
    Jobs,
    Dashboard,
    None,
}

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; margin: 0; background: #f6f7fb; color: #1d2433; }
    header { background: #1d2433; padding: 1rem 2rem; }
    header a { color: #fff; margin-right: 1.5rem; text-decoration: none; }
    header a.active { border-bottom: 2px solid #6ea8fe; }
    main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
    .job-card { background: #fff; border-radius: 8px; padding: 1rem 1.25rem; margin-bottom: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
    .job-card.featured { border-left: 4px solid #6ea8fe; }
    .job-type { background: #e7efff; border-radius: 4px; padding: 0 .4rem; font-size: .85em; }
    .tabs a { margin-right: 1rem; }
    .tabs a.active { font-weight: bold; }
    #application-success { color: #157347; font-weight: bold; }
    form label { display: block; margin: .5rem 0; }
"#;

/// Wraps a page body in the shared document shell.
pub fn layout(title: &str, nav: Nav, head_extra: &str, body: &str) -> String {
    let link = |target: Nav, href: &str, label: &str| {
        let class = if nav == target { " class=\"active\"" } else { "" };
        format!(r#"<a href="{href}"{class}>{label}</a>"#)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} · Job Board</title>
  {head_extra}
  <style>{style}</style>
</head>
<body>
  <header>
    <nav>{home}{jobs}{dashboard}</nav>
  </header>
  <main>
{body}
  </main>
</body>
</html>
"#,
        title = escape(title),
        head_extra = head_extra,
        style = STYLE,
        home = link(Nav::Home, "/", "Home"),
        jobs = link(Nav::Jobs, "/jobs", "Jobs"),
        dashboard = link(Nav::Dashboard, "/dashboard", "Dashboard"),
        body = body,
    )
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "    <h2>{code} {reason}</h2>\n    <p>{message}</p>\n",
        code = status.as_u16(),
        reason = escape(reason),
        message = escape(message),
    );
    layout(reason, Nav::None, "", &body)
}
