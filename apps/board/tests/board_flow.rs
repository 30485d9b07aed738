use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use jobboard::config::Config;
use jobboard::feed::StaticFeed;
use jobboard::jobs::SystemClock;
use jobboard::models::JobRecord;
use jobboard::routes::build_router;
use jobboard::state::AppState;
use jobboard::storage::MemoryStore;

fn feed_jobs() -> Vec<JobRecord> {
    serde_json::from_str(
        r#"[
            {"id": 1, "title": "Engineer", "company": "Acme", "location": "Remote",
             "type": "full-time", "description": "Build", "qualifications": "Rust",
             "howToApply": "Apply online"},
            {"id": 2, "title": "Barista", "company": "Beans", "location": "Lisbon",
             "type": "part-time", "description": "Coffee", "qualifications": "Smile",
             "howToApply": "Walk in"}
        ]"#,
    )
    .unwrap()
}

fn app() -> Router {
    let state = AppState {
        config: Config::default(),
        feed: Arc::new(StaticFeed(feed_jobs())),
        store: Arc::new(MemoryStore::new()),
        clock: Arc::new(SystemClock),
    };
    build_router(state)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str, cookie: &str) -> Request<Body> {
    Request::get(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, cookie: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// First visit, returning the `name=value` pair of the issued scope cookie.
async fn visit(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("scope cookie issued")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

fn location(response: &axum::response::Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

#[tokio::test]
async fn test_home_features_feed_jobs() {
    let app = app();
    let cookie = visit(&app).await;
    let response = app.clone().oneshot(get("/", &cookie)).await.unwrap();
    // Returning visitors keep their cookie.
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let html = body_string(response).await;
    assert!(html.contains("Engineer"));
    assert!(html.contains("job-card featured"));
}

#[tokio::test]
async fn test_listing_filters_by_query() {
    let app = app();
    let cookie = visit(&app).await;
    let html = body_string(
        app.clone()
            .oneshot(get("/jobs?title=eng&location=&type=", &cookie))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("Engineer"));
    assert!(!html.contains("Barista"));

    let html = body_string(
        app.clone()
            .oneshot(get("/jobs?title=nothing-matches", &cookie))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("No jobs found."));
}

#[tokio::test]
async fn test_post_job_then_listed_last() {
    let app = app();
    let cookie = visit(&app).await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/dashboard/jobs",
            &cookie,
            "title=+Designer+&company=Studio&location=NYC&type=contract&description=Draw&qualifications=Taste&how_to_apply=Email",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard?tab=employer");

    let jobs: Vec<Value> = serde_json::from_str(&body_string(
        app.clone().oneshot(get("/api/v1/jobs", &cookie)).await.unwrap(),
    )
    .await)
    .unwrap();
    assert_eq!(jobs.len(), 3);
    let last = jobs.last().unwrap();
    assert_eq!(last["title"], "Designer");
    assert_eq!(last["type"], "contract");
    assert!(last["id"].as_i64().unwrap() > 0);

    let html = body_string(app.clone().oneshot(get("/dashboard", &cookie)).await.unwrap()).await;
    assert!(html.contains("<h4>Designer</h4>"));
}

#[tokio::test]
async fn test_visitors_do_not_share_postings() {
    let app = app();
    let alice = visit(&app).await;
    let bob = visit(&app).await;
    assert_ne!(alice, bob);

    app.clone()
        .oneshot(post_form("/dashboard/jobs", &alice, "title=Private"))
        .await
        .unwrap();

    let jobs: Vec<Value> = serde_json::from_str(&body_string(
        app.clone().oneshot(get("/api/v1/jobs", &bob)).await.unwrap(),
    )
    .await)
    .unwrap();
    assert_eq!(jobs.len(), 2);
}

#[tokio::test]
async fn test_select_and_apply_flow() {
    let app = app();
    let cookie = visit(&app).await;

    let html = body_string(app.clone().oneshot(get("/job-details", &cookie)).await.unwrap()).await;
    assert!(html.contains("No job selected."));

    let response = app
        .clone()
        .oneshot(post_form("/jobs/select", &cookie, "id=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/job-details");

    let html = body_string(
        app.clone()
            .oneshot(get("/job-details?panel=form", &cookie))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("<h2>Engineer</h2>"));
    assert!(html.contains(r#"<section id="application-form-section">"#));

    let boundary = "X-BOARD-BOUNDARY";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\n Ada Lovelace \r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"email\"\r\n\r\nada@example.com\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"ada.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n%PDF-1.4 not stored\r\n\
         --{b}--\r\n",
        b = boundary
    );
    let response = app
        .clone()
        .oneshot(
            Request::post("/job-details/apply")
                .header(header::COOKIE, &cookie)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/job-details?panel=submitted");

    let html = body_string(
        app.clone()
            .oneshot(get("/job-details?panel=submitted", &cookie))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains(r#"<div id="application-success">"#));
    assert!(html.contains(r#"http-equiv="refresh""#));

    let applications: Vec<Value> = serde_json::from_str(&body_string(
        app.clone()
            .oneshot(get("/api/v1/applications", &cookie))
            .await
            .unwrap(),
    )
    .await)
    .unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["jobId"], "1");
    assert_eq!(applications[0]["name"], "Ada Lovelace");
    assert_eq!(applications[0]["resume"], "ada.pdf");

    let html = body_string(
        app.clone()
            .oneshot(get("/dashboard?tab=candidate", &cookie))
            .await
            .unwrap(),
    )
    .await;
    assert!(html.contains("Applied on:"));
}

fn apply_request(cookie: &str, resume: Vec<u8>) -> Request<Body> {
    let boundary = "X-BOARD-BOUNDARY";
    let mut body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nGrace\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"email\"\r\n\r\ngrace@example.com\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"resume\"; filename=\"grace.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n",
        b = boundary
    )
    .into_bytes();
    body.extend(resume);
    body.extend(format!("\r\n--{boundary}--\r\n").into_bytes());

    Request::post("/job-details/apply")
        .header(header::COOKIE, cookie)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_apply_accepts_resume_over_default_body_limit() {
    let app = app();
    let cookie = visit(&app).await;
    app.clone()
        .oneshot(post_form("/jobs/select", &cookie, "id=1"))
        .await
        .unwrap();

    let resume = vec![b'a'; 3 * 1024 * 1024];
    let response = app.clone().oneshot(apply_request(&cookie, resume)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/job-details?panel=submitted");

    let applications: Vec<Value> = serde_json::from_str(&body_string(
        app.clone()
            .oneshot(get("/api/v1/applications", &cookie))
            .await
            .unwrap(),
    )
    .await)
    .unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0]["resume"], "grace.pdf");
}

#[tokio::test]
async fn test_select_without_id_is_rejected() {
    let app = app();
    let cookie = visit(&app).await;
    let response = app
        .clone()
        .oneshot(post_form("/jobs/select", &cookie, "id=+"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let html = body_string(app.clone().oneshot(get("/job-details", &cookie)).await.unwrap()).await;
    assert!(html.contains("No job selected."));
}

#[tokio::test]
async fn test_selecting_unknown_job_shows_not_found() {
    let app = app();
    let cookie = visit(&app).await;
    app.clone()
        .oneshot(post_form("/jobs/select", &cookie, "id=42"))
        .await
        .unwrap();
    let html = body_string(app.clone().oneshot(get("/job-details", &cookie)).await.unwrap()).await;
    assert!(html.contains("Job not found."));
}

#[tokio::test]
async fn test_unknown_path_is_404_and_health_is_ok() {
    let app = app();
    let response = app
        .clone()
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let health: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(health["status"], "ok");
}
