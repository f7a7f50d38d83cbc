//! Per-step wizard screens.

pub mod auth;
pub mod briefs;
pub mod complete;
pub mod genre;
pub mod input;
pub mod loading;
pub mod song;
pub mod visual;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::spinner_glyph;
use crate::state::AppState;

/// Renders a centered title line near the top of the area.
pub(crate) fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    if area.height < 2 {
        return;
    }
    let line = Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );
}

/// Renders a centered subtitle line under the title.
pub(crate) fn render_subtitle(frame: &mut Frame, area: Rect, subtitle: &str) {
    if area.height < 3 {
        return;
    }
    let line = Line::from(Span::styled(
        subtitle.to_string(),
        Style::default().fg(Color::Gray),
    ))
    .centered();
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(area.x, area.y + 2, area.width, 1),
    );
}

/// Renders the dimmed vendor credit above the key hint row.
pub(crate) fn render_powered_by(frame: &mut Frame, area: Rect, vendor: &str) {
    if area.height < 2 {
        return;
    }
    let line = Line::from(Span::styled(
        format!("Powered by {vendor}"),
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(area.x, area.y + area.height - 2, area.width, 1),
    );
}

/// Renders the dimmed key hint on the bottom row of the area.
pub(crate) fn render_hint(frame: &mut Frame, area: Rect, hint: &str) {
    if area.height < 1 {
        return;
    }
    let line = Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(area.x, area.y + area.height - 1, area.width, 1),
    );
}

/// Renders a centered busy screen: spinner, headline, status line.
pub(crate) fn render_busy(
    frame: &mut Frame,
    app: &AppState,
    area: Rect,
    headline: &str,
    status: &str,
    vendor: Option<&str>,
) {
    if area.height < 6 {
        return;
    }
    let center_y = area.y + area.height / 2;
    let spinner = Line::from(Span::styled(
        spinner_glyph(app.spinner_frame).to_string(),
        Style::default().fg(Color::Cyan),
    ))
    .centered();
    frame.render_widget(
        Paragraph::new(spinner),
        Rect::new(area.x, center_y.saturating_sub(2), area.width, 1),
    );

    let headline_line = Line::from(Span::styled(
        headline.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
    .centered();
    frame.render_widget(
        Paragraph::new(headline_line),
        Rect::new(area.x, center_y, area.width, 1),
    );

    let status_line = Line::from(Span::styled(
        status.to_string(),
        Style::default().fg(Color::Gray),
    ))
    .centered();
    frame.render_widget(
        Paragraph::new(status_line),
        Rect::new(area.x, center_y + 1, area.width, 1),
    );

    if let Some(vendor) = vendor {
        render_powered_by(frame, area, vendor);
    }
    render_hint(frame, area, "Esc to quit");
}
