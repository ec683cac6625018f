//! CLI entrypoint for Sugar Signal
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use std::path::Path;
use std::sync::Arc;
use sugar_signal_application::{RelayPredictionUseCase, SubmitAssessmentUseCase};
use sugar_signal_infrastructure::{ConfigLoader, ConfigScope, FileConfig, HttpPredictionGateway};
use sugar_signal_presentation::{
    Cli, Command, ConsoleFormatter, ProxyServer, TuiApp, cancel_on_signal,
};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        Cli::command().print_help()?;
        bail!("A command is required: use `serve` or `form`.");
    };

    // Load configuration
    let mut config = ConfigLoader::load_for_cli(cli.config.as_deref(), cli.no_config)
        .map_err(|e| anyhow!("Failed to load configuration: {}", e))?;
    apply_overrides(&mut config, &command);

    let scope = match command {
        Command::Serve { .. } => ConfigScope::Serve,
        Command::Form { .. } => ConfigScope::Form,
    };
    let warnings = config.ensure_valid(scope)?;

    match command {
        Command::Serve { .. } => {
            init_stderr_logging(cli.verbose);
            if !warnings.is_empty() {
                eprintln!("{}", ConsoleFormatter::format_issues(&warnings));
            }
            run_server(&config).await
        }
        Command::Form { .. } => {
            if !warnings.is_empty() {
                eprintln!("{}", ConsoleFormatter::format_issues(&warnings));
            }
            let _guard = init_file_logging(cli.verbose, &config)?;
            run_form(&config).await
        }
    }
}

/// CLI flags take precedence over every configuration source
fn apply_overrides(config: &mut FileConfig, command: &Command) {
    match command {
        Command::Serve { bind, upstream_url } => {
            if let Some(bind) = bind {
                config.server.bind = bind.clone();
            }
            if let Some(url) = upstream_url {
                config.upstream.url = url.clone();
            }
        }
        Command::Form { proxy_url } => {
            if let Some(url) = proxy_url {
                config.form.proxy_url = url.clone();
            }
        }
    }
}

fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    }
}

fn init_stderr_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// The form owns the terminal, so its logs go to a file
fn init_file_logging(verbose: u8, config: &FileConfig) -> Result<WorkerGuard> {
    let directory = config.logging.resolved_directory();
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(&directory, &config.logging.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(verbose))
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(guard)
}

async fn run_server(config: &FileConfig) -> Result<()> {
    let (addr, _) = config.server.parse_bind();
    let addr = addr.ok_or_else(|| anyhow!("Invalid bind address: {}", config.server.bind))?;

    // === Dependency Injection ===
    let upstream = Arc::new(HttpPredictionGateway::new(&config.upstream.url)?);
    let relay = RelayPredictionUseCase::new(upstream);
    let server = ProxyServer::new(addr, relay);

    println!(
        "{}",
        ConsoleFormatter::server_banner(server.addr(), &config.upstream.url)
    );

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_signal(tokio::signal::ctrl_c(), shutdown.clone()));

    server
        .run(shutdown)
        .await
        .with_context(|| format!("Proxy failed on {}", addr))
}

async fn run_form(config: &FileConfig) -> Result<()> {
    info!("Starting Sugar Signal form");

    // === Dependency Injection ===
    let proxy = Arc::new(HttpPredictionGateway::new(&config.form.proxy_url)?);
    let submit = SubmitAssessmentUseCase::new(proxy);

    let mut app = TuiApp::new(submit, config.form.proxy_url.clone());
    app.run().await?;
    Ok(())
}

fn print_config_sources(config_path: Option<&Path>) {
    println!("Configuration sources (highest priority first):");
    for source in ConfigLoader::sources(config_path) {
        println!(
            "{}",
            ConsoleFormatter::format_source(source.label, &source.path, source.found)
        );
    }
    println!("  Environment: SUGAR_SIGNAL_<SECTION>__<KEY>");
}
