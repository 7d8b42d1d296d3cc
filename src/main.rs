use clap::Parser;
use compliance_canvas::cli::{self, Cli, Commands, LogFormat};
use compliance_canvas::config;
use compliance_canvas::errors::CanvasError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let settings = match config::load_settings(cli.config.as_deref()).await {
        Ok(settings) => settings,
        Err(e) => exit_with(e),
    };

    // Initialize logging
    let log_level = match (cli.verbose, settings.debug) {
        (0, false) => "info",
        (0, true) | (1, _) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color);
    match cli.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    let result = match cli.command {
        Commands::Serve(args) => cli::serve::handle_serve(settings, args).await,
        Commands::Gateway(args) => cli::serve::handle_gateway(settings, args).await,
    };

    if let Err(e) = result {
        exit_with(e);
    }
}

fn exit_with(e: CanvasError) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(e.exit_code());
}
