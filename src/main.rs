use anyhow::{Context, Result};
use cinema_queue::cli::{self, Cli, Commands};
use cinema_queue::web::WebServer;
use cinema_queue::{CinemaSession, Config};
use clap::Parser;
use std::sync::Arc;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments first to get debug flag
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    let level = if cli.debug {
        tracing::Level::DEBUG // DEBUG level or higher when --debug
    } else {
        tracing::Level::WARN // WARN level or higher in normal operation (errors and warnings only)
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        None => run_display(config).await?,
        Some(Commands::Show) => cli::print_config(&config),
        Some(Commands::Simulate(args)) => {
            let session = build_session(&config)?;
            cli::run_simulation(&session, &args).await?;
        }
    }

    Ok(())
}

fn build_session(config: &Config) -> Result<CinemaSession> {
    let provider = config.greeting.provider();
    if provider.is_none() {
        println!(
            "💡 No greeting provider ({} unset or unusable), greetings will use \"{}\"",
            config.greeting.api_key_env, config.greeting.default_message
        );
    }

    Ok(CinemaSession::new(
        config.queue.clone(),
        config.initial_theme()?,
        provider,
        config.greeting.policy()?,
    ))
}

/// Run the live display (default mode when no subcommand is provided)
async fn run_display(config: Config) -> Result<()> {
    let session = Arc::new(build_session(&config)?);

    println!("🍿 Cinema queue started");
    println!("🎨 Theme: {}", session.theme().await.name);

    if !config.web_ui.enabled {
        println!("💡 Web UI disabled in configuration, nothing to run");
        println!("💡 Try `cinema-queue simulate` for a headless run");
        return Ok(());
    }

    let web_server = WebServer::new(config.web_ui.port, config.web_ui.host.clone(), session);
    println!(
        "🌐 Display available at: http://{}:{}",
        config.web_ui.host, config.web_ui.port
    );
    println!("🛑 Press Ctrl+C to stop");

    let mut handle = tokio::spawn(async move {
        if let Err(e) = web_server.start().await {
            eprintln!("❌ Web server failed: {}", e);
        }
    });

    tokio::select! {
        result = signal::ctrl_c() => {
            result.context("Failed to listen for ctrl_c")?;
            println!("\n🛑 Received Ctrl+C, shutting down...");
            handle.abort();
        }
        _ = &mut handle => {
            println!("🧹 Web server stopped, shutting down...");
        }
    }

    Ok(())
}
