//! CLI argument parsing via clap.

use clap::Parser;
use jokebox::joke::Category;

/// A random joke card for the terminal.
#[derive(Debug, Parser)]
#[command(name = "jokebox", version, long_version = jokebox::build_info::LONG_VERSION)]
pub struct Args {
    /// Path to config file (default: ./jokebox.toml or ~/.config/jokebox/jokebox.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override joke API base URL.
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// Starting category (Any, Programming, Misc, Pun, Spooky, Christmas).
    #[arg(long = "category")]
    pub category: Option<Category>,

    /// Print one joke to stdout and exit.
    #[arg(long = "once")]
    pub once: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
