//! Application state composition.
//!
//! ```text
//! AppState
//! ├── session: Session       (wizard step + campaign data, hype-core)
//! ├── screen: ScreenState    (input buffers, cursors, notices)
//! ├── task: TaskState        (generation task gate)
//! └── spinner_frame          (animation counter)
//! ```
//!
//! The session is the single source of truth for the wizard step; the
//! screen state only carries what the views need on top of it.

use std::sync::Arc;
use std::time::Instant;

use hype_core::config::Config;
use hype_core::core::generate::Generator;
use hype_core::core::session::{Session, Step};

use crate::common::TextField;

/// Combined application state for the wizard TUI.
pub struct AppState {
    pub config: Config,
    /// Shared with spawned generation tasks.
    pub generator: Arc<Generator>,
    pub session: Session,
    pub screen: ScreenState,
    pub task: TaskState,
    pub spinner_frame: usize,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = Arc::new(Generator::from_config(&config));
        Self {
            config,
            generator,
            session: Session::new(),
            screen: ScreenState::default(),
            task: TaskState::Idle,
            spinner_frame: 0,
            should_quit: false,
        }
    }
}

/// Per-screen UI state.
#[derive(Default)]
pub struct ScreenState {
    /// Passcode entry buffer (auth step).
    pub passcode: TextField,
    /// Inline error shown under the passcode field.
    pub auth_error: Option<String>,
    /// Splash timer start (loading step).
    pub loading_since: Option<Instant>,
    /// Team name entry buffer (input step).
    pub team_name: TextField,
    /// Inline error shown under the team name field.
    pub input_error: Option<String>,
    /// Highlighted brief column (0 or 1).
    pub brief_cursor: usize,
    /// Scroll offset shared by both brief columns.
    pub brief_scroll: u16,
    /// Highlighted genre row.
    pub genre_cursor: usize,
    /// One-line notice (e.g., sample visual substituted).
    pub notice: Option<String>,
    /// Scroll offset of the final campaign page.
    pub page_scroll: u16,
}

impl ScreenState {
    /// Clears campaign-scoped UI state for a new campaign.
    pub fn reset_campaign(&mut self) {
        self.team_name.clear();
        self.input_error = None;
        self.brief_cursor = 0;
        self.brief_scroll = 0;
        self.genre_cursor = 0;
        self.notice = None;
        self.page_scroll = 0;
    }
}

/// Generation task gate.
///
/// One generation runs at a time; triggers arriving while a task is running
/// are ignored by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// No generation task running.
    Idle,
    /// A generation task for the given step is in flight.
    Generating { step: Step },
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        matches!(self, TaskState::Generating { .. })
    }
}
