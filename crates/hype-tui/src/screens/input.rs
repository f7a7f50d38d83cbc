//! Team input screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::centered_rect;
use crate::state::AppState;

use super::{render_hint, render_subtitle, render_title};

pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
    render_title(frame, area, "🏆 AI Campaign Generator");
    render_subtitle(
        frame,
        area,
        "Create a customized marketing campaign for your favourite sports team",
    );

    let field_area = centered_rect(area, 44.min(area.width), 3);
    let input = Paragraph::new(app.screen.team_name.value().to_string()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Sports Team Name "),
    );
    frame.render_widget(input, field_area);

    frame.set_cursor_position((
        field_area.x + 1 + app.screen.team_name.cursor_offset(),
        field_area.y + 1,
    ));

    if let Some(error) = &app.screen.input_error {
        let error_y = field_area.y + field_area.height + 1;
        if error_y < area.y + area.height {
            let line = Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ))
            .centered();
            frame.render_widget(
                Paragraph::new(line),
                Rect::new(area.x, error_y, area.width, 1),
            );
        }
    }

    render_hint(frame, area, "Enter to generate - Esc to quit");
}
