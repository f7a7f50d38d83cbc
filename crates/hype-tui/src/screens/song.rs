//! Anthem generation screen.

use hype_core::services::ServiceKind;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::state::AppState;

use super::render_busy;

pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
    let genre_name = app
        .session
        .selected_genre()
        .map_or("anthem", |genre| genre.name());
    render_busy(
        frame,
        app,
        area,
        "🎵 Generating victory anthem...",
        &format!(
            "Creating {genre_name} for {}...",
            app.session.team_name()
        ),
        Some(ServiceKind::Audio.vendor_label()),
    );
}
