//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use hype_core::catalog::GenreKind;
use hype_core::core::events::WizardEvent;
use hype_core::core::session::{Provenance, Step, WizardError};
use hype_core::services::ServiceKind;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, TaskState};

/// Splash screen duration before the wizard moves to team input.
pub const LOADING_DELAY: Duration = Duration::from_secs(2);

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            handle_loading_timer(app);
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(app, key)
        }
        UiEvent::Terminal(_) => vec![],
        UiEvent::Wizard(wizard_event) => handle_wizard_event(app, wizard_event),
    }
}

fn handle_loading_timer(app: &mut AppState) {
    if app.session.step() != Step::Loading {
        return;
    }
    // a missing timer counts as elapsed, so the wizard can never stall here
    let elapsed = app
        .screen
        .loading_since
        .map_or(LOADING_DELAY, |since| since.elapsed());
    if elapsed >= LOADING_DELAY {
        app.screen.loading_since = None;
        log_if_rejected(app.session.finish_loading());
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from any step.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return vec![UiEffect::Quit];
    }

    match app.session.step() {
        Step::Auth => handle_auth_key(app, key),
        Step::Loading | Step::GeneratingBriefs | Step::GeneratingImages | Step::GeneratingSong => {
            // Busy screens only accept quit.
            if key.code == KeyCode::Esc {
                app.should_quit = true;
                return vec![UiEffect::Quit];
            }
            vec![]
        }
        Step::Input => handle_input_key(app, key),
        Step::BriefSelection => handle_brief_key(app, key),
        Step::ImageSelection => handle_image_key(app, key),
        Step::GenreSelection => handle_genre_key(app, key),
        Step::Complete => handle_complete_key(app, key),
    }
}

fn handle_auth_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            vec![UiEffect::Quit]
        }
        KeyCode::Enter => {
            let passcode = app.screen.passcode.value().to_string();
            match app.session.submit_passcode(&passcode) {
                Ok(()) => {
                    app.screen.auth_error = None;
                    app.screen.passcode.clear();
                    app.screen.loading_since = Some(Instant::now());
                }
                Err(WizardError::InvalidPasscode) => {
                    app.screen.auth_error =
                        Some("Invalid passcode. Please try again.".to_string());
                    app.screen.passcode.clear();
                }
                Err(err) => tracing::warn!("passcode submit rejected: {err}"),
            }
            vec![]
        }
        KeyCode::Backspace => {
            app.screen.passcode.backspace();
            vec![]
        }
        KeyCode::Left => {
            app.screen.passcode.move_left();
            vec![]
        }
        KeyCode::Right => {
            app.screen.passcode.move_right();
            vec![]
        }
        KeyCode::Char(c) => {
            app.screen.passcode.insert(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_input_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            vec![UiEffect::Quit]
        }
        KeyCode::Enter => {
            if app.task.is_running() {
                return vec![];
            }
            let team_name = app.screen.team_name.value().to_string();
            match app.session.submit_team_name(&team_name) {
                Ok(()) => {
                    app.screen.input_error = None;
                    app.task = TaskState::Generating {
                        step: Step::GeneratingBriefs,
                    };
                    vec![UiEffect::GenerateBriefs {
                        team_name: app.session.team_name().to_string(),
                    }]
                }
                Err(WizardError::EmptyTeamName) => {
                    app.screen.input_error = Some("Please enter a team name.".to_string());
                    vec![]
                }
                Err(err) => {
                    tracing::warn!("team name submit rejected: {err}");
                    vec![]
                }
            }
        }
        KeyCode::Backspace => {
            app.screen.team_name.backspace();
            vec![]
        }
        KeyCode::Left => {
            app.screen.team_name.move_left();
            vec![]
        }
        KeyCode::Right => {
            app.screen.team_name.move_right();
            vec![]
        }
        KeyCode::Char(c) => {
            app.screen.team_name.insert(c);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_brief_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            vec![UiEffect::Quit]
        }
        KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
            app.screen.brief_cursor = 1 - app.screen.brief_cursor.min(1);
            vec![]
        }
        KeyCode::Up => {
            app.screen.brief_scroll = app.screen.brief_scroll.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            app.screen.brief_scroll = app.screen.brief_scroll.saturating_add(1);
            vec![]
        }
        KeyCode::Enter => {
            if app.task.is_running() {
                return vec![];
            }
            let index = app.screen.brief_cursor;
            match app.session.select_brief(index) {
                Ok(()) => {
                    let brief = app
                        .session
                        .selected_brief()
                        .map(|brief| brief.content.clone())
                        .unwrap_or_default();
                    app.task = TaskState::Generating {
                        step: Step::GeneratingImages,
                    };
                    vec![UiEffect::GenerateImage {
                        team_name: app.session.team_name().to_string(),
                        brief_markdown: brief,
                    }]
                }
                Err(err) => {
                    tracing::warn!("brief selection rejected: {err}");
                    vec![]
                }
            }
        }
        _ => vec![],
    }
}

fn handle_image_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            vec![UiEffect::Quit]
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            if app.task.is_running() {
                return vec![];
            }
            match app.session.regenerate_image() {
                Ok(()) => {
                    app.screen.notice = None;
                    let brief = app
                        .session
                        .selected_brief()
                        .map(|brief| brief.content.clone())
                        .unwrap_or_default();
                    app.task = TaskState::Generating {
                        step: Step::GeneratingImages,
                    };
                    vec![UiEffect::GenerateImage {
                        team_name: app.session.team_name().to_string(),
                        brief_markdown: brief,
                    }]
                }
                Err(err) => {
                    tracing::warn!("regenerate rejected: {err}");
                    vec![]
                }
            }
        }
        KeyCode::Enter => {
            log_if_rejected(app.session.accept_image());
            vec![]
        }
        _ => vec![],
    }
}

fn handle_genre_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let genre_count = GenreKind::all().len();
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            vec![UiEffect::Quit]
        }
        KeyCode::Up => {
            app.screen.genre_cursor =
                (app.screen.genre_cursor + genre_count - 1) % genre_count;
            vec![]
        }
        KeyCode::Down => {
            app.screen.genre_cursor = (app.screen.genre_cursor + 1) % genre_count;
            vec![]
        }
        KeyCode::Enter => {
            if app.task.is_running() {
                return vec![];
            }
            let genre = GenreKind::all()[app.screen.genre_cursor.min(genre_count - 1)];
            match app.session.select_genre(genre) {
                Ok(()) => {
                    app.task = TaskState::Generating {
                        step: Step::GeneratingSong,
                    };
                    vec![UiEffect::GenerateSong { genre }]
                }
                Err(err) => {
                    tracing::warn!("genre selection rejected: {err}");
                    vec![]
                }
            }
        }
        _ => vec![],
    }
}

fn handle_complete_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.should_quit = true;
            vec![UiEffect::Quit]
        }
        KeyCode::Up => {
            app.screen.page_scroll = app.screen.page_scroll.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            app.screen.page_scroll = app.screen.page_scroll.saturating_add(1);
            vec![]
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            match app.session.new_campaign() {
                Ok(()) => app.screen.reset_campaign(),
                Err(err) => tracing::warn!("new campaign rejected: {err}"),
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_wizard_event(app: &mut AppState, event: WizardEvent) -> Vec<UiEffect> {
    app.task = TaskState::Idle;
    match event {
        WizardEvent::BriefsReady { briefs } => {
            log_if_rejected(app.session.briefs_ready(briefs));
        }
        WizardEvent::ImageReady { image, source } => {
            app.screen.notice = match source {
                Provenance::Fallback => Some(format!(
                    "{} unavailable - showing a sample visual.",
                    ServiceKind::Visual.label()
                )),
                Provenance::Service => None,
            };
            log_if_rejected(app.session.image_ready(image));
        }
        WizardEvent::SongReady { song, source } => {
            if source == Provenance::Fallback {
                tracing::info!("placeholder anthem substituted");
            }
            log_if_rejected(app.session.song_ready(song));
        }
    }
    vec![]
}

fn log_if_rejected(result: Result<(), WizardError>) {
    if let Err(err) = result {
        tracing::warn!("wizard trigger rejected: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hype_core::config::Config;
    use hype_core::core::session::{Brief, BriefVariant, CampaignImage};

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            update(app, key(KeyCode::Char(c)));
        }
    }

    fn app() -> AppState {
        AppState::new(Config::default())
    }

    fn app_at_input() -> AppState {
        let mut app = app();
        type_text(&mut app, "kbs2025");
        update(&mut app, key(KeyCode::Enter));
        app.session.finish_loading().unwrap();
        app
    }

    fn brief_pair() -> [Brief; 2] {
        [
            Brief::new(
                BriefVariant::Narrative,
                "# Falcons\n\nnarrative".to_string(),
                Provenance::Fallback,
            ),
            Brief::new(
                BriefVariant::Strategy,
                "# Falcons\n\nstrategy".to_string(),
                Provenance::Fallback,
            ),
        ]
    }

    #[test]
    fn test_correct_passcode_moves_to_loading() {
        let mut app = app();
        type_text(&mut app, "KBS2025");
        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(effects.is_empty());
        assert_eq!(app.session.step(), Step::Loading);
        assert!(app.screen.auth_error.is_none());
        assert!(app.screen.loading_since.is_some());
    }

    #[test]
    fn test_wrong_passcode_shows_error_and_stays() {
        let mut app = app();
        type_text(&mut app, "KBS2024");
        update(&mut app, key(KeyCode::Enter));

        assert_eq!(app.session.step(), Step::Auth);
        assert!(app.screen.auth_error.is_some());
        assert!(app.screen.passcode.is_empty());
    }

    #[test]
    fn test_loading_advances_after_delay() {
        let mut app = app();
        type_text(&mut app, "kbs2025");
        update(&mut app, key(KeyCode::Enter));

        // not yet
        update(&mut app, UiEvent::Tick);
        assert_eq!(app.session.step(), Step::Loading);

        // backdate the timer past the splash delay
        app.screen.loading_since = Instant::now().checked_sub(LOADING_DELAY * 2);
        update(&mut app, UiEvent::Tick);
        assert_eq!(app.session.step(), Step::Input);
    }

    #[test]
    fn test_empty_team_name_is_rejected_inline() {
        let mut app = app_at_input();
        type_text(&mut app, "   ");
        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(effects.is_empty());
        assert_eq!(app.session.step(), Step::Input);
        assert!(app.screen.input_error.is_some());
    }

    #[test]
    fn test_team_name_submit_spawns_brief_generation() {
        let mut app = app_at_input();
        type_text(&mut app, "Falcons");
        let effects = update(&mut app, key(KeyCode::Enter));

        assert_eq!(
            effects,
            vec![UiEffect::GenerateBriefs {
                team_name: "Falcons".to_string()
            }]
        );
        assert_eq!(app.session.step(), Step::GeneratingBriefs);
        assert!(app.task.is_running());
    }

    #[test]
    fn test_enter_is_ignored_while_generation_runs() {
        let mut app = app_at_input();
        type_text(&mut app, "Falcons");
        update(&mut app, key(KeyCode::Enter));

        // a second submit while the task runs must not spawn another
        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_brief_selection_spawns_image_generation() {
        let mut app = app_at_input();
        type_text(&mut app, "Falcons");
        update(&mut app, key(KeyCode::Enter));
        update(
            &mut app,
            UiEvent::Wizard(WizardEvent::BriefsReady {
                briefs: brief_pair(),
            }),
        );
        assert_eq!(app.session.step(), Step::BriefSelection);
        assert!(!app.task.is_running());

        update(&mut app, key(KeyCode::Right));
        let effects = update(&mut app, key(KeyCode::Enter));

        assert_eq!(app.session.step(), Step::GeneratingImages);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::GenerateImage { brief_markdown, .. }]
                if brief_markdown.contains("strategy")
        ));
    }

    #[test]
    fn test_fallback_image_sets_notice_and_regenerate_clears_it() {
        let mut app = app_at_input();
        type_text(&mut app, "Falcons");
        update(&mut app, key(KeyCode::Enter));
        update(
            &mut app,
            UiEvent::Wizard(WizardEvent::BriefsReady {
                briefs: brief_pair(),
            }),
        );
        update(&mut app, key(KeyCode::Enter));
        update(
            &mut app,
            UiEvent::Wizard(WizardEvent::ImageReady {
                image: CampaignImage::new("https://a/1.jpg".into(), "prompt".into()),
                source: Provenance::Fallback,
            }),
        );

        assert_eq!(app.session.step(), Step::ImageSelection);
        assert!(app.screen.notice.is_some());

        let effects = update(&mut app, key(KeyCode::Char('r')));
        assert_eq!(app.session.step(), Step::GeneratingImages);
        assert!(app.screen.notice.is_none());
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::GenerateImage { .. }]
        ));
        // the selected brief survives regeneration
        assert!(app.session.selected_brief().is_some());
    }

    #[test]
    fn test_ctrl_c_quits_from_any_step() {
        let mut app = app();
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(effects, vec![UiEffect::Quit]);
        assert!(app.should_quit);
    }
}
