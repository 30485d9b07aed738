//! Visitor scope cookie.
//!
//! The scope partitions storage per visitor, the way a browser partitions its
//! local storage per origin. First-time visitors are issued a fresh UUID.

use axum::{extract::Request, middleware::Next, response::Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;
use uuid::Uuid;

pub const SCOPE_COOKIE: &str = "jobboard_scope";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitorScope(pub Uuid);

/// Middleware: resolves the visitor scope, inserting it as a request
/// extension and setting the cookie when it was missing or invalid.
pub async fn ensure_scope(
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> (CookieJar, Response) {
    let existing = jar
        .get(SCOPE_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok());

    let (scope, jar) = match existing {
        Some(id) => (VisitorScope(id), jar),
        None => {
            let id = Uuid::new_v4();
            debug!("Issuing new visitor scope {id}");
            (VisitorScope(id), jar.add(scope_cookie(id)))
        }
    };

    request.extensions_mut().insert(scope);
    let response = next.run(request).await;
    (jar, response)
}

fn scope_cookie(id: Uuid) -> Cookie<'static> {
    Cookie::build((SCOPE_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .permanent()
        .build()
}
