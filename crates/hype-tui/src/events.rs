//! UI event types.
//!
//! Events are collected by the runtime (terminal input, ticks, and wizard
//! generation results arriving over the inbox) and fed to the reducer.

use hype_core::core::events::WizardEvent;

/// Events consumed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Terminal input event.
    Terminal(crossterm::event::Event),
    /// Periodic tick for animations and timers.
    Tick,
    /// Result of a generation task.
    Wizard(WizardEvent),
}
