//! Intake form rendering

use crate::app::App;
use crate::state::FieldId;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one bordered input field
const FIELD_HEIGHT: u16 = 3;

/// Preferred form width
const FORM_WIDTH: u16 = 60;

/// Draw the intake form: five fields and the submit row
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Center the form horizontally
    let form_width = FORM_WIDTH.min(area.width);
    let form_area = Rect {
        x: area.x + (area.width.saturating_sub(form_width)) / 2,
        y: area.y,
        width: form_width,
        height: area.height,
    };

    let form_focused = !app.state.form.is_submit_row_active();
    let border_color = if form_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Assessment Intake ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, form_area);

    // The errored field gets one extra row for its message
    let errored = app.state.field_error.as_ref().map(|e| e.field);
    let mut constraints: Vec<Constraint> = FieldId::ALL
        .iter()
        .map(|field| {
            if errored == Some(*field) {
                Constraint::Length(FIELD_HEIGHT + 1)
            } else {
                Constraint::Length(FIELD_HEIGHT)
            }
        })
        .collect();
    constraints.push(Constraint::Length(1)); // gap
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(form_area);

    for (idx, field) in FieldId::ALL.into_iter().enumerate() {
        let is_active = app.state.form.active_field_index == idx;
        draw_field(frame, chunks[idx], app, field, is_active);
    }

    draw_submit_row(frame, chunks[FieldId::ALL.len() + 1], app);
}

/// Draw one input field, with its error message beneath it when marked
fn draw_field(frame: &mut Frame, area: Rect, app: &App, field: FieldId, is_active: bool) {
    let error = app.state.error_for(field);

    let (field_area, error_area) = if error.is_some() {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(FIELD_HEIGHT), Constraint::Length(1)])
            .split(area);
        (parts[0], Some(parts[1]))
    } else {
        (area, None)
    };

    let border_style = if error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let form_field = app.state.form.field(field);
    let value = form_field.as_text();
    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(format!(" {} ", form_field.id.label()))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(content, field_area);

    if let (Some(message), Some(error_area)) = (error, error_area) {
        let error_line = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error_line, error_area);
    }
}

/// Draw the submit button row
fn draw_submit_row(frame: &mut Frame, area: Rect, app: &App) {
    let label = if app.state.submitting {
        "Submitting..."
    } else {
        "Submit"
    };

    let button_width = area.width.min(20);
    let button_area = Rect {
        x: area.x + (area.width.saturating_sub(button_width)) / 2,
        y: area.y,
        width: button_width,
        height: area.height,
    };

    render_button(
        frame,
        button_area,
        label,
        app.state.form.is_submit_row_active(),
        !app.state.submitting,
        Some(Color::Green),
    );
}
