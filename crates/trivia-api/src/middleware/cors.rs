use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Creates the CORS layer for the API: any origin, the standard HTTP
/// methods, any headers. The API is unauthenticated so no credentials are
/// involved.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}
