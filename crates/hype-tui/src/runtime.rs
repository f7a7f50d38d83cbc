//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Generation tasks send their results as `UiEvent`s directly to `inbox_tx`;
//! the runtime drains `inbox_rx` each frame. One task runs at a time: the
//! reducer's task gate refuses new generation triggers while one is in
//! flight, and a running task is never cancelled.

use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use hype_core::config::Config;
use hype_core::core::events::WizardEvent;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll duration while a generation task is running (smooth spinner).
pub const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Poll duration when idle (no task running).
/// Longer timeout reduces CPU usage when nothing is happening.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Interval between Tick events (spinner advance, loading timer).
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Full-screen wizard runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on normal exit and panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Inbox sender - generation tasks send events here.
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new wizard runtime, entering the alternate screen.
    pub fn new(config: Config) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(config);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop, restoring the terminal afterwards.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.state.should_quit {
            self.terminal
                .draw(|frame| render::render(frame, &self.state))
                .context("Failed to draw frame")?;

            let timeout = if self.state.task.is_running() {
                FRAME_DURATION
            } else {
                IDLE_POLL_DURATION
            };
            if event::poll(timeout).context("Failed to poll terminal events")? {
                let term_event = event::read().context("Failed to read terminal event")?;
                self.dispatch(UiEvent::Terminal(term_event));
            }

            // Drain generation results delivered since the last frame.
            while let Ok(inbox_event) = self.inbox_rx.try_recv() {
                self.dispatch(inbox_event);
            }

            if self.last_tick.elapsed() >= TICK_INTERVAL {
                self.last_tick = Instant::now();
                self.dispatch(UiEvent::Tick);
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::GenerateBriefs { team_name } => {
                let generator = Arc::clone(&self.state.generator);
                let inbox = self.inbox_tx.clone();
                tokio::spawn(async move {
                    let briefs = generator.generate_briefs(&team_name).await;
                    let _ = inbox.send(UiEvent::Wizard(WizardEvent::BriefsReady { briefs }));
                });
            }
            UiEffect::GenerateImage {
                team_name,
                brief_markdown,
            } => {
                let generator = Arc::clone(&self.state.generator);
                let inbox = self.inbox_tx.clone();
                tokio::spawn(async move {
                    let (image, source) =
                        generator.generate_image(&team_name, &brief_markdown).await;
                    let _ = inbox.send(UiEvent::Wizard(WizardEvent::ImageReady { image, source }));
                });
            }
            UiEffect::GenerateSong { genre } => {
                let generator = Arc::clone(&self.state.generator);
                let inbox = self.inbox_tx.clone();
                tokio::spawn(async move {
                    let (song, source) = generator.generate_song(genre).await;
                    let _ = inbox.send(UiEvent::Wizard(WizardEvent::SongReady { song, source }));
                });
            }
        }
    }
}
