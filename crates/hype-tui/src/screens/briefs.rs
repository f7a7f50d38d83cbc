//! Brief generation and selection screens.

use hype_core::core::session::Step;
use hype_core::services::ServiceKind;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::markdown::markdown_lines;
use crate::state::AppState;

use super::{render_busy, render_hint, render_powered_by, render_title};

pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
    if app.session.step() == Step::GeneratingBriefs {
        render_busy(
            frame,
            app,
            area,
            "📄 Generating campaign briefs...",
            "Crafting personalized campaign strategies...",
            Some(ServiceKind::Brief.vendor_label()),
        );
        return;
    }

    render_title(frame, area, "📄 Select Your Campaign Brief");

    let body = Rect::new(
        area.x + 1,
        area.y + 3,
        area.width.saturating_sub(2),
        area.height.saturating_sub(6),
    );
    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(body);

    for (index, brief) in app.session.briefs().iter().enumerate().take(2) {
        let selected = index == app.screen.brief_cursor;
        let border_style = if selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title = format!(" ✨ Strategy {} ", index + 1);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                title,
                if selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                },
            ));

        let mut lines = markdown_lines(&brief.content);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Themes: {}", brief.themes.join(" · ")),
            Style::default().fg(Color::Magenta),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.screen.brief_scroll, 0));
        frame.render_widget(paragraph, columns[index]);
    }

    render_powered_by(frame, area, ServiceKind::Brief.vendor_label());
    render_hint(
        frame,
        area,
        "←/→ switch - ↑/↓ scroll - Enter select - Esc quit",
    );
}
