use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use trivia_api::config::ApiConfig;
use trivia_api::handlers::AppState;
use trivia_api::storage::{seed_default_categories, Database};
use trivia_api::{logging, routes};

#[derive(Parser, Debug)]
#[command(name = "trivia-api", version, about = "Trivia questions and quiz HTTP API")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the configured bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the configured bind port
    #[arg(short, long)]
    port: Option<u16>,

    /// Insert the default categories into an empty database before serving
    #[arg(long)]
    seed: bool,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_path) =
        ApiConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let _log_guard = logging::init_tracing(&config.logging)?;
    info!("Loaded configuration from {}", config_path.display());

    let database = Database::open(&config.database.path).with_context(|| {
        format!("Failed to open database at {}", config.database.path.display())
    })?;
    info!("Database ready at {}", config.database.path.display());

    if cli.seed {
        seed_default_categories(&database).context("Failed to seed categories")?;
    }

    let app_state = web::Data::new(AppState::new(database, config.quiz.selection));
    let cors_config = config.cors.clone();
    let bind_addr = config.bind_address();
    info!(
        selection = ?config.quiz.selection,
        "Starting trivia-api server at http://{}", bind_addr
    );

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(routes::cors(&cors_config))
            .configure(routes::configure_routes)
    })
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {bind_addr}"))?
    .run()
    .await?;

    Ok(())
}
