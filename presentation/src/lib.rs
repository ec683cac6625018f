//! Presentation layer for sugar-signal
//!
//! This crate contains the CLI definition, the HTTP proxy that relays
//! assessments to the prediction service, and the terminal assessment form.

pub mod cli;
pub mod output;
pub mod server;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use server::{ProxyServer, cancel_on_signal, router};
pub use tui::{FormState, SubmissionStatus, TuiApp};
