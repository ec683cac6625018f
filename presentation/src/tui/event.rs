//! TUI event types
//!
//! Events coming back into the select! loop from background tasks.

use sugar_signal_application::SubmitError;
use sugar_signal_domain::Prediction;

/// Events emitted by background tasks for rendering
#[derive(Debug, Clone)]
pub enum FormEvent {
    /// The in-flight submission resolved
    SubmissionFinished(Result<Prediction, SubmitError>),
}
