use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;

pub fn build_cors_layer(allowed_origin: &str) -> Result<CorsLayer, String> {
    let allowed_origin = allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| format!("CORS_ALLOWED_ORIGIN is not a valid header value: {e}"))?;

    Ok(CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}
