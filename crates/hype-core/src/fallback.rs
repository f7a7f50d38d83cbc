//! Deterministic local fallback generators.
//!
//! Every generation step resolves to *some* result: when a service call
//! fails (or the app runs in test mode) these producers supply the value.

use rand::seq::SliceRandom;

use crate::catalog::{GenreKind, SAMPLE_IMAGE_URLS};
use crate::core::session::{BriefVariant, Song};
use crate::prompts;

/// Placeholder track URL served when no track library is configured.
const PLACEHOLDER_SONG_URL: &str = "https://example.com/generated-song.mp3";

/// Renders the deterministic fallback brief for a variant.
pub fn brief_markdown(team_name: &str, variant: BriefVariant) -> String {
    let template = match variant {
        BriefVariant::Narrative => prompts::FALLBACK_BRIEF_NARRATIVE_TEMPLATE,
        BriefVariant::Strategy => prompts::FALLBACK_BRIEF_STRATEGY_TEMPLATE,
    };
    prompts::render_team_template(template, team_name)
}

/// Returns the deterministic fallback image prompt for a team.
pub fn image_prompt(team_name: &str) -> String {
    format!(
        "Professional sports marketing poster featuring {team_name}, dynamic action shot with \
         team colors, championship trophy, energetic crowd in background, high-quality stadium \
         lighting, inspirational and powerful composition"
    )
}

/// Picks a placeholder visual from the fixed sample pool.
pub fn sample_image_url() -> String {
    SAMPLE_IMAGE_URLS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(SAMPLE_IMAGE_URLS[0])
        .to_string()
}

/// Returns the deterministic placeholder anthem for a genre.
pub fn placeholder_song(genre: GenreKind) -> Song {
    Song {
        url: PLACEHOLDER_SONG_URL.to_string(),
        title: format!("{} Anthem", genre.name()),
    }
}
