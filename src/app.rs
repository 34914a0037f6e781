//! Application state and core logic

use crate::config::IntakeConfig;
use crate::delivery::{DeliveryClient, DeliveryClientTrait};
use crate::state::{validate, AppState, Form, SubmitStatus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Delivery client for the upload and email dispatch APIs
    delivery: Box<dyn DeliveryClientTrait>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = IntakeConfig::load()?;
        Ok(Self::with_client(Box::new(DeliveryClient::new(&config))))
    }

    /// Create an App over a specific delivery client
    pub fn with_client(delivery: Box<dyn DeliveryClientTrait>) -> Self {
        Self {
            state: AppState::default(),
            delivery,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // A failure banner takes over the keyboard until dismissed
        if self.state.error_message.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.error_message = None;
            }
            return Ok(());
        }

        let on_buttons_row = self.state.form.is_buttons_row_active();

        match key.code {
            KeyCode::Tab => {
                self.state.status_message = None;
                self.state.form.next_field();
            }
            KeyCode::BackTab => self.state.form.prev_field(),
            // Up/Down for button navigation on the buttons row
            KeyCode::Up | KeyCode::Char('k') if on_buttons_row => {
                self.state.form.prev_button();
            }
            KeyCode::Down | KeyCode::Char('j') if on_buttons_row => {
                self.state.form.next_button();
            }
            // Enter on the buttons row triggers the selected button
            // Button order: 0=Submit, 1=Clear, 2=Quit
            KeyCode::Enter if on_buttons_row => match self.state.form.selected_button {
                0 => self.submit_form().await,
                1 => self.clear_form(),
                2 => self.quit = true,
                _ => {}
            },
            // Submit shortcut (works from anywhere)
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit_form().await;
            }
            KeyCode::Esc => {
                self.state.clear_messages();
            }
            // Left/Right cycle options on select fields (no-op elsewhere)
            KeyCode::Left if !on_buttons_row => {
                self.state.form.get_active_field_mut().select_prev();
            }
            KeyCode::Right if !on_buttons_row => {
                self.state.form.get_active_field_mut().select_next();
            }
            // Enter on a field advances focus
            KeyCode::Enter if !on_buttons_row => self.state.form.next_field(),
            // Form field input (only when not on the buttons row)
            KeyCode::Char(c) if !on_buttons_row => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                self.state.status_message = None;
                self.state.form.get_active_field_mut().push_char(ch);
            }
            KeyCode::Backspace if !on_buttons_row => {
                self.state.form.get_active_field_mut().pop_char();
            }
            _ => {}
        }
        Ok(())
    }

    /// Reset the form and every transient piece of submit state
    fn clear_form(&mut self) {
        self.state.form.reset();
        self.state.validation_errors.clear();
        self.state.clear_messages();
        self.state.submit_status = SubmitStatus::Idle;
    }

    /// Run the submit orchestration: validate, upload the three images in
    /// order, then dispatch the email
    async fn submit_form(&mut self) {
        // In-flight guard: a submit while one is running is ignored
        if self.state.is_submitting() {
            return;
        }
        self.state.clear_messages();

        let errors = validate(&self.state.form);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "validation rejected submission");
            self.state.validation_errors = errors;
            return;
        }
        self.state.validation_errors.clear();
        self.state.submit_status = SubmitStatus::Submitting;

        match self.deliver().await {
            Ok(()) => {
                tracing::info!("submission delivered");
                self.state.form.reset();
                self.state.submit_status = SubmitStatus::Succeeded;
                self.state.status_message = Some("Form submitted successfully!".to_string());
            }
            Err(err) => {
                tracing::error!("Error uploading images or sending email: {err:#}");
                self.state.submit_status = SubmitStatus::Failed;
                self.state.error_message =
                    Some("Form submission failed. Please try again.".to_string());
            }
        }
    }

    /// Upload the three images sequentially, then send the one email.
    /// Any failure aborts the rest of the sequence; images already
    /// uploaded are left behind on the media host.
    async fn deliver(&mut self) -> Result<()> {
        let id_document = PathBuf::from(self.state.form.id_document.as_text());
        let headshot = PathBuf::from(self.state.form.headshot.as_text());
        let card_photo = PathBuf::from(self.state.form.card_photo.as_text());

        let id_document_url = self.delivery.upload_image(&id_document).await?;
        let headshot_url = self.delivery.upload_image(&headshot).await?;
        let card_photo_url = self.delivery.upload_image(&card_photo).await?;

        let submission =
            self.state
                .form
                .to_submission(id_document_url, headshot_url, card_photo_url);
        self.delivery.send_email(&submission).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::MockDeliveryClientTrait;
    use crate::state::valid_form;
    use anyhow::anyhow;
    use mockall::Sequence;

    fn app_with(mock: MockDeliveryClientTrait) -> App {
        App::with_client(Box::new(mock))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    mod submit_orchestration {
        use super::*;

        #[tokio::test]
        async fn test_three_uploads_then_one_email_in_order() {
            let mut mock = MockDeliveryClientTrait::new();
            let mut seq = Sequence::new();
            for (name, url) in [
                ("id.png", "https://img.example/id.png"),
                ("headshot.png", "https://img.example/headshot.png"),
                ("card.png", "https://img.example/card.png"),
            ] {
                mock.expect_upload_image()
                    .times(1)
                    .in_sequence(&mut seq)
                    .withf(move |path| path.ends_with(name))
                    .returning(move |_| Ok(url.to_string()));
            }
            mock.expect_send_email()
                .times(1)
                .in_sequence(&mut seq)
                .withf(|submission| {
                    submission.id_document_url == "https://img.example/id.png"
                        && submission.headshot_url == "https://img.example/headshot.png"
                        && submission.card_photo_url == "https://img.example/card.png"
                        && submission.first_name == "Jane"
                })
                .returning(|_| Ok(()));

            let mut app = app_with(mock);
            app.state.form = valid_form();
            app.submit_form().await;

            assert_eq!(app.state.submit_status, SubmitStatus::Succeeded);
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Form submitted successfully!")
            );
            // Form reset to defaults
            assert_eq!(app.state.form.first_name.as_text(), "");
            assert_eq!(app.state.form.campaign.selected_option(), None);
            assert_eq!(app.state.form.id_document.as_text(), "");
        }

        #[tokio::test]
        async fn test_upload_failure_skips_email_and_keeps_form() {
            let mut mock = MockDeliveryClientTrait::new();
            mock.expect_upload_image()
                .times(1)
                .returning(|_| Err(anyhow!("connection refused")));
            mock.expect_send_email().times(0);

            let mut app = app_with(mock);
            app.state.form = valid_form();
            app.submit_form().await;

            assert_eq!(app.state.submit_status, SubmitStatus::Failed);
            assert_eq!(
                app.state.error_message.as_deref(),
                Some("Form submission failed. Please try again.")
            );
            // Form contents preserved for a retry
            assert_eq!(app.state.form.first_name.as_text(), "Jane");
        }

        #[tokio::test]
        async fn test_email_failure_after_uploads_fails_submission() {
            let mut mock = MockDeliveryClientTrait::new();
            mock.expect_upload_image()
                .times(3)
                .returning(|_| Ok("https://img.example/a.png".to_string()));
            mock.expect_send_email()
                .times(1)
                .returning(|_| Err(anyhow!("dispatch rejected with status 400")));

            let mut app = app_with(mock);
            app.state.form = valid_form();
            app.submit_form().await;

            assert_eq!(app.state.submit_status, SubmitStatus::Failed);
            assert!(app.state.error_message.is_some());
        }

        #[tokio::test]
        async fn test_invalid_form_makes_no_delivery_calls() {
            let mut mock = MockDeliveryClientTrait::new();
            mock.expect_upload_image().times(0);
            mock.expect_send_email().times(0);

            let mut app = app_with(mock);
            app.submit_form().await;

            assert_eq!(app.state.submit_status, SubmitStatus::Idle);
            assert!(app.state.validation_errors.contains_key("first_name"));
        }

        #[tokio::test]
        async fn test_in_flight_guard_blocks_second_submit() {
            let mut mock = MockDeliveryClientTrait::new();
            mock.expect_upload_image().times(0);
            mock.expect_send_email().times(0);

            let mut app = app_with(mock);
            app.state.form = valid_form();
            app.state.submit_status = SubmitStatus::Submitting;
            app.submit_form().await;

            // Still submitting; nothing was re-entered
            assert_eq!(app.state.submit_status, SubmitStatus::Submitting);
        }

        #[tokio::test]
        async fn test_resubmit_after_failure_is_allowed() {
            let mut mock = MockDeliveryClientTrait::new();
            mock.expect_upload_image()
                .times(3)
                .returning(|_| Ok("https://img.example/a.png".to_string()));
            mock.expect_send_email().times(1).returning(|_| Ok(()));

            let mut app = app_with(mock);
            app.state.form = valid_form();
            app.state.submit_status = SubmitStatus::Failed;
            app.submit_form().await;

            assert_eq!(app.state.submit_status, SubmitStatus::Succeeded);
        }
    }

    mod key_handling {
        use super::*;

        fn idle_app() -> App {
            let mut mock = MockDeliveryClientTrait::new();
            mock.expect_upload_image().times(0);
            mock.expect_send_email().times(0);
            app_with(mock)
        }

        #[tokio::test]
        async fn test_tab_advances_focus() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.form.active_field_index, 1);
        }

        #[tokio::test]
        async fn test_typing_fills_active_field() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Tab)).await.unwrap(); // first_name
            for c in "jane".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::SHIFT))
                .await
                .unwrap();
            assert_eq!(app.state.form.first_name.as_text(), "janeX");
        }

        #[tokio::test]
        async fn test_arrow_keys_cycle_select_options() {
            let mut app = idle_app();
            // campaign is the first field
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(
                app.state.form.campaign.selected_option(),
                Some("Safe Link")
            );
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert_eq!(
                app.state.form.campaign.selected_option(),
                Some("SafetyNet")
            );
        }

        #[tokio::test]
        async fn test_enter_on_quit_button_quits() {
            let mut app = idle_app();
            app.state.form.set_active_field(crate::state::FIELD_COUNT);
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_enter_on_clear_button_resets_form() {
            let mut app = idle_app();
            app.state.form.first_name.set_text("Jane".to_string());
            app.state
                .validation_errors
                .insert("ssn", "SSN must be a 9-digit number.".to_string());
            app.state.form.set_active_field(crate::state::FIELD_COUNT);
            app.handle_key(key(KeyCode::Down)).await.unwrap(); // Clear
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.form.first_name.as_text(), "");
            assert!(app.state.validation_errors.is_empty());
        }

        #[tokio::test]
        async fn test_error_banner_swallows_keys_until_dismissed() {
            let mut app = idle_app();
            app.state.error_message = Some("Form submission failed. Please try again.".to_string());
            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(app.state.form.campaign.selected_option(), None);
            assert!(app.state.error_message.is_some());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.error_message.is_none());
        }

        #[tokio::test]
        async fn test_ctrl_s_submits_and_surfaces_validation_errors() {
            let mut app = idle_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
                .await
                .unwrap();
            assert!(!app.state.validation_errors.is_empty());
        }
    }
}
