//! Intake form rendering (fields column and action panel)

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, SubmitStatus, FIELD_COUNT};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Height of one rendered field (top border + content + bottom border)
const FIELD_HEIGHT: u16 = 3;

/// Draw the intake form with its action sidebar
pub fn draw_intake_form(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(22), // Action panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields, scrolled so the active field stays visible
fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    // Form is focused when not on the buttons row
    let form_focused = !app.state.form.is_buttons_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" New Agent Intake ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let capacity = ((inner.height / FIELD_HEIGHT) as usize).max(1);
    let anchor = app.state.form.active_field_index.min(FIELD_COUNT - 1);
    let first = (anchor + 1).saturating_sub(capacity);
    let last = (first + capacity).min(FIELD_COUNT);

    let mut constraints: Vec<Constraint> = (first..last)
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (slot, index) in (first..last).enumerate() {
        if let Some(field) = app.state.form.get_field(index) {
            let error = app
                .state
                .validation_errors
                .get(field.name)
                .map(String::as_str);
            let is_active = form_focused && index == app.state.form.active_field_index;
            draw_field(frame, chunks[slot], field, is_active, error);
        }
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.form.is_buttons_row_active();
    let selected_button = app.state.form.selected_button;
    let submitting = matches!(app.state.submit_status, SubmitStatus::Submitting);

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // Layout for buttons vertically
    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Clear
            Constraint::Length(BUTTON_HEIGHT), // Quit
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    // Render buttons (primary action first)
    render_action_button(
        frame,
        button_chunks[0],
        if submitting { "Submitting..." } else { "Submit" },
        is_focused && selected_button == 0,
        !submitting,
        Some(Color::Green),
    );

    render_action_button(
        frame,
        button_chunks[1],
        "Clear",
        is_focused && selected_button == 1,
        !submitting,
        Some(Color::Yellow),
    );

    render_action_button(
        frame,
        button_chunks[2],
        "Quit",
        is_focused && selected_button == 2,
        true,
        Some(Color::Gray),
    );
}
