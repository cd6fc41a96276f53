mod cli;
mod commands;
mod context;
mod paths;

use std::process::ExitCode;

use cli::Command;
use multiview_config::MultiviewConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "multiview=info";

/// `--log-level` wins over the config file; a bare level is scoped to
/// our crates.
fn log_directive(flag: Option<&str>, config: &MultiviewConfig) -> String {
    match flag {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("multiview={level}"),
        None => config.logging.level.directive().to_string(),
    }
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| DEFAULT_LOG_DIRECTIVE.parse().unwrap()),
            ),
        )
        .init();
}

fn run(command: Command, config: &MultiviewConfig) -> multiview_common::Result<serde_json::Value> {
    match command {
        Command::Layout {
            count,
            layout,
            viewport,
        } => commands::layout::run(config, count, layout, viewport),
        Command::Share { urls, layout, base } => {
            commands::share::run(config, &urls, layout, base.as_deref())
        }
        Command::Open {
            input,
            persist,
            viewport,
        } => commands::open::run(config, input.as_deref().unwrap_or_default(), persist, viewport),
        Command::Session { action } => commands::session::run(config, action),
        Command::Player { action, level } => commands::player::run(config, action, level),
        Command::Schedule {
            date,
            source,
            no_fallback,
        } => commands::schedule::run(config, date, source, no_fallback),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // The log level lives in the config, so the load error is reported
    // once logging is up
    let loaded = match args.config.as_deref() {
        Some(path) => multiview_config::toml_loader::load_from_path(path),
        None => multiview_config::load_config(),
    };
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (MultiviewConfig::default(), Some(e)),
    };

    init_logging(&log_directive(args.log_level.as_deref(), &config));
    tracing::debug!("Multiview v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    match run(args.command, &config) {
        Ok(output) => {
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    tracing::error!("failed to render output: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
