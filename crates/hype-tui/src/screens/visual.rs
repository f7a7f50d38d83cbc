//! Visual generation and review screens.

use hype_core::core::session::Step;
use hype_core::services::ServiceKind;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::common::centered_rect;
use crate::state::AppState;

use super::{render_busy, render_hint, render_powered_by, render_subtitle, render_title};

pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
    if app.session.step() == Step::GeneratingImages {
        render_busy(
            frame,
            app,
            area,
            "🎨 Generating campaign visual...",
            &format!(
                "Creating a stunning visual for {}...",
                app.session.team_name()
            ),
            Some(ServiceKind::Visual.vendor_label()),
        );
        return;
    }

    render_title(frame, area, "🎨 Your Campaign Visual");
    render_subtitle(
        frame,
        area,
        &format!("AI-generated marketing visual for {}", app.session.team_name()),
    );

    let panel = centered_rect(area, area.width.saturating_sub(8).max(20), 9);
    let mut lines = Vec::new();
    if let Some(image) = app.session.image() {
        lines.push(Line::from(Span::styled(
            "Visual URL",
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            image.url.clone(),
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Prompt",
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(image.prompt.clone()));
    } else {
        lines.push(Line::from(Span::styled(
            "No visual was generated. Press r to try again.",
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Campaign Visual "),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, panel);

    if let Some(notice) = &app.screen.notice {
        let notice_y = panel.y + panel.height + 1;
        if notice_y < area.y + area.height {
            let line = Line::from(Span::styled(
                notice.clone(),
                Style::default().fg(Color::Yellow),
            ))
            .centered();
            frame.render_widget(
                Paragraph::new(line),
                Rect::new(area.x, notice_y, area.width, 1),
            );
        }
    }

    render_powered_by(frame, area, ServiceKind::Visual.vendor_label());
    render_hint(frame, area, "r regenerate - Enter continue - Esc quit");
}
