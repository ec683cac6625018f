//! TUI (Text User Interface) module for sugar-signal
//!
//! A single-screen assessment form built on ratatui: eight numeric fields,
//! a submit action and an outcome panel.

mod app;
mod event;
mod keys;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::FormEvent;
pub use keys::{Action, KeyHandler};
pub use state::{FormState, SubmissionStatus};
pub use widgets::{
    FormLayout, form::FormWidget, header::HeaderWidget, outcome::OutcomeWidget,
    status_bar::StatusBarWidget,
};
