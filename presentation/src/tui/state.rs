//! Form state
//!
//! Single source of truth for everything the form renders. Mutated by key
//! actions from the event loop and by submission results coming back from
//! the background request.

use sugar_signal_application::SubmitError;
use sugar_signal_domain::{
    AssessmentInput, Metric, Prediction, RiskLevel, format_metric_value, parse_metric_value,
};
use tracing::debug;

/// Lifecycle of the current submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet (or state reset)
    Idle,
    /// A request is in flight; the submit action is disabled
    Pending,
    /// The last request returned a prediction
    Succeeded(Prediction),
    /// The last request failed; carries the user-facing message
    Failed(&'static str),
}

/// Central form state: owned by the TuiApp select! loop
pub struct FormState {
    /// Values as they will be submitted
    pub input: AssessmentInput,
    /// Text as typed, one buffer per metric in display order
    pub buffers: [String; 8],
    /// Index into `Metric::ALL` of the focused field
    pub focus: usize,
    pub status: SubmissionStatus,
    pub should_quit: bool,
}

impl Default for FormState {
    fn default() -> Self {
        let input = AssessmentInput::default();
        let buffers = Metric::ALL.map(|m| format_metric_value(input.get(m)));
        Self {
            input,
            buffers,
            focus: 0,
            status: SubmissionStatus::Idle,
            should_quit: false,
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Focus --

    pub fn focused_metric(&self) -> Metric {
        Metric::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Metric::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Metric::ALL.len() - 1) % Metric::ALL.len();
    }

    // -- Field editing --

    /// Text currently shown for a metric
    pub fn text(&self, metric: Metric) -> &str {
        &self.buffers[metric.index()]
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffers[self.focus].push(c);
        self.sync_focused();
    }

    pub fn delete_char(&mut self) {
        self.buffers[self.focus].pop();
        self.sync_focused();
    }

    pub fn clear_field(&mut self) {
        self.buffers[self.focus].clear();
        self.sync_focused();
    }

    /// Every keystroke re-parses the field; unparseable text stores zero
    fn sync_focused(&mut self) {
        let metric = self.focused_metric();
        let value = parse_metric_value(&self.buffers[self.focus]);
        debug!("{} = {}", metric, value);
        self.input.set(metric, value);
    }

    // -- Submission --

    pub fn is_pending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending)
    }

    /// Start a submission, returning the snapshot to send.
    ///
    /// Returns `None` while a submission is already pending. Starting a new
    /// submission discards any previous result or error.
    pub fn begin_submission(&mut self) -> Option<AssessmentInput> {
        if self.is_pending() {
            return None;
        }
        self.status = SubmissionStatus::Pending;
        Some(self.input)
    }

    /// Record the outcome of the in-flight submission
    pub fn finish_submission(&mut self, result: Result<Prediction, SubmitError>) {
        self.status = match result {
            Ok(prediction) => SubmissionStatus::Succeeded(prediction),
            Err(e) => SubmissionStatus::Failed(e.user_message()),
        };
    }

    /// Risk level to display, if the last submission succeeded
    pub fn risk_level(&self) -> Option<RiskLevel> {
        match &self.status {
            SubmissionStatus::Succeeded(prediction) => Some(prediction.risk_level()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}
