//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let content_area = layout::create_layout(area);

    // Draw the intake form with its action panel
    forms::draw_intake_form(frame, content_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Failure banner overlays everything until dismissed
    if let Some(message) = &app.state.error_message {
        components::render_error_dialog(frame, message);
    }
}
