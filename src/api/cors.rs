use axum::http::{HeaderValue, request::Parts};
use glob::{MatchOptions, Pattern};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use crate::errors::CanvasError;

/// Build the CORS layer from the configured origin list.
///
/// A bare `*` allows any origin without credentials. Otherwise origins are
/// exact values or `*` globs (`https://*.amplifyapp.com`) and credentials
/// are allowed.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, CanvasError> {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let patterns = origins
        .iter()
        .map(|o| Pattern::new(o).map_err(|e| CanvasError::Config(format!("Invalid allowed origin '{}': {}", o, e))))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _parts: &Parts| {
            origin.to_str().map_or(false, |o| origin_allowed(&patterns, o))
        }))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

const ORIGIN_MATCH: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// `*` never crosses a `/`, so a wildcard cannot swallow a path.
pub fn origin_allowed(patterns: &[Pattern], origin: &str) -> bool {
    patterns.iter().any(|p| p.matches_with(origin, ORIGIN_MATCH))
}
