use axum::Router;
use crate::api::{self, AppState};
use crate::cli::commands::ServeArgs;
use crate::config::Settings;
use crate::errors::CanvasError;
use tracing::info;

/// Start the standalone surface.
pub async fn handle_serve(settings: Settings, args: ServeArgs) -> Result<(), CanvasError> {
    let settings = apply_overrides(settings, &args);
    let state = api::create_app_state(settings);
    let app = api::build_router(state.clone())?;
    run(state, app, "standalone").await
}

/// Start the gateway surface.
pub async fn handle_gateway(settings: Settings, args: ServeArgs) -> Result<(), CanvasError> {
    let settings = apply_overrides(settings, &args);
    let state = api::create_app_state(settings);
    let app = api::build_gateway_router(state.clone())?;
    run(state, app, "gateway").await
}

fn apply_overrides(mut settings: Settings, args: &ServeArgs) -> Settings {
    if let Some(host) = &args.host {
        settings.host = host.clone();
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    settings
}

async fn run(state: AppState, app: Router, surface: &str) -> Result<(), CanvasError> {
    let addr = format!("{}:{}", state.settings.host, state.settings.port);
    info!(
        surface,
        version = state.settings.version(),
        region = %state.settings.aws_region,
        demo_seed = ?state.demo.seed(),
        "Starting API server"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| CanvasError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
