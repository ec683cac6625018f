//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for sugar-signal
#[derive(Parser, Debug)]
#[command(name = "sugar-signal")]
#[command(author, version, about = "Diabetes risk assessment form and prediction proxy")]
#[command(long_about = r#"
Sugar Signal collects eight health metrics and asks a hosted model for a
diabetes risk assessment. The result is guidance, never a diagnosis.

Two commands make up the system:
1. serve: a local proxy exposing POST /api/predict, relaying to the model
2. form:  an interactive terminal form that submits to the proxy

Configuration files are loaded from (in priority order):
1. SUGAR_SIGNAL_<SECTION>__<KEY> environment variables
2. --config <path>       Explicit config file
3. ./sugar-signal.toml   Project-level config
4. ~/.config/sugar-signal/config.toml   Global config

Example:
  sugar-signal serve --bind 127.0.0.1:3000
  sugar-signal form --proxy-url http://127.0.0.1:3000/api/predict
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Ignore discovered config files and environment variables (--config is still read)
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the local prediction proxy
    Serve {
        /// Address to listen on (overrides [server] bind)
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Prediction service endpoint (overrides [upstream] url)
        #[arg(long, value_name = "URL")]
        upstream_url: Option<String>,
    },

    /// Open the terminal assessment form
    Form {
        /// Proxy endpoint to submit to (overrides [form] proxy_url)
        #[arg(long, value_name = "URL")]
        proxy_url: Option<String>,
    },
}
