//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 submission task (tokio::spawn)
//!   ├─ crossterm EventStream              └─ SubmitAssessmentUseCase::execute()
//!   ├─ event_rx (FormEvent)  <────────────────┘
//!   └─ tick_interval
//! ```
//!
//! At most one submission task exists at a time: [`FormState::begin_submission`]
//! refuses to start another while one is pending. There is no cancellation;
//! a pending request runs until it resolves.

use super::event::FormEvent;
use super::keys::{Action, KeyHandler};
use super::state::FormState;
use super::widgets::{
    FormLayout, form::FormWidget, header::HeaderWidget, outcome::OutcomeWidget,
    status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use sugar_signal_application::SubmitAssessmentUseCase;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Main TUI application
pub struct TuiApp {
    submit: SubmitAssessmentUseCase,
    endpoint: String,
    event_tx: mpsc::UnboundedSender<FormEvent>,
    event_rx: mpsc::UnboundedReceiver<FormEvent>,
    tick_count: u64,
}

impl TuiApp {
    /// Create a new TUI application submitting through `submit`
    pub fn new(submit: SubmitAssessmentUseCase, endpoint: impl Into<String>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            submit,
            endpoint: endpoint.into(),
            event_tx,
            event_rx,
            tick_count: 0,
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut state = FormState::new();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        info!("Assessment form started (proxy: {})", self.endpoint);

        loop {
            terminal.draw(|frame| self.render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(term_event) = event_stream.next() => {
                    if let Event::Key(key) = term_event? {
                        let action = KeyHandler::handle(key);
                        self.apply_action(&mut state, action);
                    }
                }

                // Results from the submission task
                Some(event) = self.event_rx.recv() => {
                    self.apply_event(&mut state, event);
                }

                // Tick for the pending spinner
                _ = tick.tick() => {
                    self.tick_count = self.tick_count.wrapping_add(1);
                }
            }
        }

        info!("Assessment form closed");
        Ok(())
    }

    /// Apply a key action to the form state
    pub fn apply_action(&self, state: &mut FormState, action: Action) {
        match action {
            Action::NextField => state.focus_next(),
            Action::PrevField => state.focus_prev(),
            Action::InsertChar(c) => state.insert_char(c),
            Action::DeleteChar => state.delete_char(),
            Action::ClearField => state.clear_field(),
            Action::Submit => self.start_submission(state),
            Action::Quit => state.should_quit = true,
            Action::None => {}
        }
    }

    /// Apply a background event to the form state
    pub fn apply_event(&self, state: &mut FormState, event: FormEvent) {
        match event {
            FormEvent::SubmissionFinished(result) => {
                debug!("Submission finished: ok={}", result.is_ok());
                state.finish_submission(result);
            }
        }
    }

    /// Receive the next background event (used by tests and the event loop)
    pub async fn next_event(&mut self) -> Option<FormEvent> {
        self.event_rx.recv().await
    }

    fn start_submission(&self, state: &mut FormState) {
        let Some(input) = state.begin_submission() else {
            debug!("Submit ignored: a submission is already pending");
            return;
        };

        let submit = self.submit.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = submit.execute(&input).await;
            // Receiver dropped means the form was closed
            let _ = tx.send(FormEvent::SubmissionFinished(result));
        });
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame, state: &FormState) {
        let layout = FormLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(&self.endpoint), layout.header);
        frame.render_widget(FormWidget::new(state), layout.form);
        frame.render_widget(
            OutcomeWidget::new(state).with_tick(self.tick_count),
            layout.outcome,
        );
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
    }
}
