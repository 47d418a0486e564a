//! Request-level middleware: HTML form method override and access logging.

use std::time::Instant;

use axum::extract::{Query, Request};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

use crate::transport::http::types::MethodOverrideQuery;

/// Rewrites `POST ...?_method=PUT|PATCH|DELETE` into that method.
///
/// Must wrap the router (not be routed through it) so dispatch sees the new method.
pub fn override_method(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }
    let requested = Query::<MethodOverrideQuery>::try_from_uri(req.uri())
        .ok()
        .and_then(|Query(q)| q.method)
        .map(|m| m.trim().to_ascii_uppercase());
    let method = match requested.as_deref() {
        Some("PUT") => Method::PUT,
        Some("PATCH") => Method::PATCH,
        Some("DELETE") => Method::DELETE,
        _ => return req,
    };
    *req.method_mut() = method;
    req
}

/// Prints one line per request: `PUT /fruits/<id>?_method=PUT 302 0.412 ms`.
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let started = Instant::now();
    let response = next.run(req).await;
    println!(
        "{} {} {} {:.3} ms",
        method,
        uri,
        response.status().as_u16(),
        started.elapsed().as_secs_f64() * 1000.0
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(method: Method, uri: &str) -> Request {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn post_with_override_becomes_target_method() {
        let req = override_method(request(Method::POST, "/fruits/abc?_method=DELETE"));
        assert_eq!(req.method(), Method::DELETE);
        let req = override_method(request(Method::POST, "/fruits/abc?_method=put"));
        assert_eq!(req.method(), Method::PUT);
        let req = override_method(request(Method::POST, "/fruits/abc?x=1&_method=PATCH"));
        assert_eq!(req.method(), Method::PATCH);
    }

    #[test]
    fn non_post_and_unknown_values_are_untouched() {
        let req = override_method(request(Method::GET, "/fruits/abc?_method=DELETE"));
        assert_eq!(req.method(), Method::GET);
        let req = override_method(request(Method::POST, "/fruits?_method=CONNECT"));
        assert_eq!(req.method(), Method::POST);
        let req = override_method(request(Method::POST, "/fruits"));
        assert_eq!(req.method(), Method::POST);
    }
}
