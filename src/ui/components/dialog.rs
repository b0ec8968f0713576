//! Notification dialog overlay

use crate::state::Notification;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the post-submit notification centered on the screen.
///
/// Success shows the echoed payload verbatim (pretty-printed JSON keeps its
/// own line breaks); failure shows the generic notice. Dismissed with
/// Enter or Esc.
pub fn render_notification_dialog(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    let color = if notification.is_success() {
        Color::Green
    } else {
        Color::Red
    };

    let body_lines: Vec<&str> = notification.body().lines().collect();
    let content_width = body_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(notification.title().len())
        .max(28);

    // +6: borders, padding, and room for the hint line
    let dialog_width = (content_width as u16 + 6)
        .min(area.width.saturating_sub(2))
        .max(20);
    // title + blank + body + blank + hint + borders
    let dialog_height = (body_lines.len() as u16 + 6).min(area.height.saturating_sub(2));

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(dialog_width) / 2,
        y: area.y + area.height.saturating_sub(dialog_height) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            notification.title(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in body_lines {
        content.push(Line::from(line.to_string()));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ]));

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}
