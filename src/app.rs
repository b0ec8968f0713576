//! Application state and core logic

use crate::backend::{BackendClient, BackendClientTrait, NoopBackend};
use crate::config::TuiConfig;
use crate::platform;
use crate::state::{AppState, Notification};
use crate::validation;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the collaborator endpoint
    backend: Box<dyn BackendClientTrait>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let (backend, endpoint): (Box<dyn BackendClientTrait>, String) =
            if config.dry_run.unwrap_or(false) {
                (Box::new(NoopBackend), "local (dry run)".to_string())
            } else {
                let client = BackendClient::new(config)?;
                let endpoint = client.endpoint();
                (Box::new(client), endpoint)
            };

        Ok(Self {
            state: AppState {
                endpoint,
                ..Default::default()
            },
            backend,
            quit: false,
        })
    }

    /// Create an App over a specific backend (used by tests)
    #[cfg(test)]
    fn with_backend(backend: Box<dyn BackendClientTrait>) -> Self {
        Self {
            state: AppState::default(),
            backend,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Notification dialog is modal: only dismissal gets through
        if self.state.notification.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notification();
            }
            return Ok(());
        }

        let on_submit_row = self.state.form.is_submit_row_active();
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Submit shortcut works from any field
            KeyCode::Char('s') if key.modifiers.contains(platform::SUBMIT_MODIFIER) => {
                self.submit().await;
            }
            KeyCode::Enter if on_submit_row => self.submit().await,
            // Enter on a field advances to the next one
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c)
                if !on_submit_row && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.state
                    .form
                    .input_char(c, key.modifiers.contains(KeyModifiers::SHIFT));
            }
            KeyCode::Backspace if !on_submit_row => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Run the submit lifecycle: validate the snapshot, then make at most
    /// one outbound call.
    ///
    /// A no-op while a previous call is in flight. Field values survive
    /// both outcomes so the user can resubmit.
    pub async fn submit(&mut self) {
        if self.state.submitting {
            return;
        }

        let submission = self.state.form.snapshot();
        if let Err(err) = validation::validate(&submission) {
            tracing::debug!("validation failed: {err}");
            self.state.field_error = Some(err);
            return;
        }
        self.state.field_error = None;

        self.state.submitting = true;
        match self.backend.submit(&submission).await {
            Ok(()) => {
                tracing::info!(email = %submission.email, "form submitted");
                self.state.notification = Some(Notification::success(&submission));
            }
            Err(err) => {
                tracing::warn!("submission failed: {err}");
                self.state.notification = Some(Notification::failure());
            }
        }
        self.state.submitting = false;
    }
}
