use axum::{
    extract::Request,
    http::header::{HeaderValue, CACHE_CONTROL, EXPIRES, PRAGMA},
    middleware::Next,
    response::Response,
};

/// Stamp every API response with headers that defeat intermediary and
/// browser caching. The portal client polls these endpoints and must always
/// see fresh data.
pub async fn no_store(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();
    headers.insert(
        CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate"),
    );
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(EXPIRES, HeaderValue::from_static("0"));
    response
}
