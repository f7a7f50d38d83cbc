//! Auth screen: shared passcode gate.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::centered_rect;
use crate::state::AppState;

use super::{render_hint, render_subtitle, render_title};

pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
    render_title(frame, area, "🏆 Welcome");
    render_subtitle(frame, area, "Enter the access passcode to continue");

    let field_area = centered_rect(area, 40.min(area.width), 3);
    let masked = "•".repeat(app.screen.passcode.value().chars().count());
    let input = Paragraph::new(masked).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Access Passcode "),
    );
    frame.render_widget(input, field_area);

    // terminal cursor inside the field
    frame.set_cursor_position((
        field_area.x + 1 + app.screen.passcode.cursor_offset(),
        field_area.y + 1,
    ));

    if let Some(error) = &app.screen.auth_error {
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

    render_hint(frame, area, "Enter to submit - Esc to quit");
}
