//! Loading splash shown right after authentication.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::state::AppState;

use super::render_busy;

pub fn render(frame: &mut Frame, app: &AppState, area: Rect) {
    render_busy(
        frame,
        app,
        area,
        "Authentication successful ✅",
        "Initializing the campaign generator...",
        None,
    );
}
