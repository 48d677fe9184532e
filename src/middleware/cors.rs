use crate::state::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Wildcard CORS by default (the SPA may be served from another origin in
/// development); set `REELSIGHT_CORS_ORIGINS` to restrict in production.
pub fn cors_layer(state: Arc<AppState>) -> CorsLayer {
    let permissive = || {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_headers(Any)
            .allow_methods(Any)
    };

    match &state.config.cors_allowed_origins {
        Some(origins_str) => {
            let origins: Vec<axum::http::HeaderValue> = origins_str
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                permissive()
            } else {
                CorsLayer::new()
                    .allow_origin(origins)
                    .allow_headers(Any)
                    .allow_methods(Any)
            }
        }
        None => permissive(),
    }
}
