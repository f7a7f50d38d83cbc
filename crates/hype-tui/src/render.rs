//! Top-level view dispatch.

use ratatui::Frame;
use hype_core::core::session::Step;

use crate::screens;
use crate::state::AppState;

/// Renders the screen for the session's current step.
pub fn render(frame: &mut Frame, app: &AppState) {
    let area = frame.area();
    match app.session.step() {
        Step::Auth => screens::auth::render(frame, app, area),
        Step::Loading => screens::loading::render(frame, app, area),
        Step::Input => screens::input::render(frame, app, area),
        Step::GeneratingBriefs | Step::BriefSelection => {
            screens::briefs::render(frame, app, area);
        }
        Step::GeneratingImages | Step::ImageSelection => {
            screens::visual::render(frame, app, area);
        }
        Step::GenreSelection => screens::genre::render(frame, app, area),
        Step::GeneratingSong => screens::song::render(frame, app, area),
        Step::Complete => screens::complete::render(frame, app, area),
    }
}
