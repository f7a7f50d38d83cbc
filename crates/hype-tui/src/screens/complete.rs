//! Final composed campaign page.

use hype_core::services::ServiceKind;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::markdown::markdown_lines;
use crate::state::AppState;

use super::{render_hint, render_title};

pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
    render_title(frame, area, "🏆 Campaign Complete!");

    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(section_heading("📄 Strategic Brief"));
    lines.push(powered_by(ServiceKind::Brief.vendor_label()));
    lines.push(Line::from(""));
    if let Some(brief) = app.session.selected_brief() {
        lines.extend(markdown_lines(&brief.content));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Campaign themes: {}", brief.themes.join(" · ")),
            Style::default().fg(Color::Magenta),
        )));
    }
    lines.push(divider());

    lines.push(section_heading("🎨 Campaign Visual"));
    lines.push(powered_by(ServiceKind::Visual.vendor_label()));
    lines.push(Line::from(""));
    if let Some(image) = app.session.image() {
        lines.push(Line::from(Span::styled(
            image.url.clone(),
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(divider());

    lines.push(section_heading("🎵 Victory Anthem"));
    lines.push(powered_by(ServiceKind::Audio.vendor_label()));
    lines.push(Line::from(""));
    if let Some(song) = app.session.song() {
        lines.push(Line::from(Span::styled(
            format!("🎼 {}", song.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if let Some(genre) = app.session.selected_genre() {
            lines.push(Line::from(format!("Genre: {}", genre.name())));
            lines.push(Line::from(Span::styled(
                format!("Style: {}", genre.description()),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("Now playing: {}", song.url),
            Style::default().fg(Color::Cyan),
        )));
    }
    lines.push(divider());
    lines.push(Line::from(Span::styled(
        "✅ Your campaign is ready",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));

    let body = Rect::new(
        area.x + 2,
        area.y + 3,
        area.width.saturating_sub(4),
        area.height.saturating_sub(5),
    );
    let page = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", app.session.team_name())),
        )
        .wrap(Wrap { trim: false })
        .scroll((app.screen.page_scroll, 0));
    frame.render_widget(page, body);

    render_hint(frame, area, "↑/↓ scroll - n new campaign - q quit");
}

fn section_heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn powered_by(vendor: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("Powered by {vendor}"),
        Style::default().fg(Color::DarkGray),
    ))
}

fn divider() -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(Color::DarkGray),
    ))
}
