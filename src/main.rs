//! CLI entry point for jokebox.

mod app;
mod cli;

use app::interactive::run_interactive;
use app::logging::{init_logging, LogTarget};
use app::once::run_once;
use clap::Parser;
use jokebox::config::{load_config_with_source, Config};
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    // Load config.
    let loaded = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let mut config = loaded.config;
    apply_cli_overrides(&mut config, &args);

    init_logging(if args.once {
        LogTarget::Stderr
    } else {
        LogTarget::File
    });
    debug!(source = ?loaded.source, category = %config.widget.category, "config loaded");

    let code = if args.once {
        run_once(&config).await
    } else {
        run_interactive(&config).await
    };
    std::process::exit(code);
}

/// Apply CLI overrides on top of the loaded file and environment.
fn apply_cli_overrides(config: &mut Config, args: &cli::Args) {
    if let Some(url) = &args.base_url {
        config.service.base_url = url.clone();
    }
    if let Some(category) = args.category {
        config.widget.category = category;
    }
    if args.no_color {
        config.display.color = false;
    }
}
