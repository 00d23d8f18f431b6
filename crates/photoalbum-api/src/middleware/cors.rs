//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use photoalbum_core::config::app::CorsConfig;

/// Builds a CORS tower layer from configuration.
///
/// The session header is exposed so browsers can read it back.
pub fn build_cors_layer(config: &CorsConfig, session_header: &HeaderName) -> CorsLayer {
    let origins = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([session_header.clone()])
        .max_age(Duration::from_secs(config.max_age_seconds))
}
