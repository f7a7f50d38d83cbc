//! Wizard controller: session state machine, generation orchestration,
//! and the event contract consumed by frontends.

pub mod events;
pub mod generate;
pub mod session;
