//! Genre selection screen.

use hype_core::catalog::GenreKind;
use hype_core::services::ServiceKind;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AppState;

use super::{render_hint, render_powered_by, render_subtitle, render_title};

pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
    render_title(frame, area, "🎵 Choose Your Anthem Style");
    render_subtitle(
        frame,
        area,
        &format!(
            "Select the perfect musical genre for {}'s victory anthem",
            app.session.team_name()
        ),
    );

    let mut lines = Vec::new();
    for (index, genre) in GenreKind::all().iter().enumerate() {
        let selected = index == app.screen.genre_cursor;
        let pointer = if selected { ">" } else { " " };
        let name_style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        lines.push(Line::from(vec![
            Span::raw(format!("  {pointer} ")),
            Span::raw(format!("{} ", genre.emoji())),
            Span::styled(genre.name().to_string(), name_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", genre.description()),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    let body = Rect::new(
        area.x + 2,
        area.y + 4,
        area.width.saturating_sub(4),
        area.height.saturating_sub(7),
    );
    frame.render_widget(Paragraph::new(lines), body);

    render_powered_by(frame, area, ServiceKind::Audio.vendor_label());
    render_hint(frame, area, "↑/↓ move - Enter select - Esc quit");
}
