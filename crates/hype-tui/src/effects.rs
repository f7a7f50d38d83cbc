//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent task spawning only (no direct UI mutations).
//!
//! This keeps the reducer pure: it only mutates state and returns effects,
//! never performs I/O or spawns tasks directly.

use hype_core::catalog::GenreKind;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn brief generation for the submitted team name.
    GenerateBriefs { team_name: String },

    /// Spawn visual generation for the selected brief.
    GenerateImage {
        team_name: String,
        brief_markdown: String,
    },

    /// Spawn anthem generation for the selected genre.
    GenerateSong { genre: GenreKind },
}
