//! Audio Service client (anthem track library).
//!
//! The library is addressed by convention: four tracks per genre at
//! `{base}/{genre-id}-{n}.mp3`. No network round-trip is needed to select a
//! track; absence of a configured library is handled by the caller with the
//! deterministic placeholder.

use rand::Rng;

use crate::catalog::GenreKind;
use crate::core::session::Song;

/// Tracks provisioned per genre in the library.
const TRACKS_PER_GENRE: u32 = 4;

/// Configuration for the Audio Service client.
#[derive(Debug, Clone)]
pub struct AudioConfig {
    /// Base URL of the track library.
    pub library_base_url: String,
}

/// Audio Service client.
pub struct AudioClient {
    config: AudioConfig,
}

impl AudioClient {
    pub fn new(config: AudioConfig) -> Self {
        Self { config }
    }

    /// Selects one of the genre's library tracks at random.
    pub fn select_track(&self, genre: GenreKind) -> Song {
        let base = self.config.library_base_url.trim_end_matches('/');
        let track = rand::thread_rng().gen_range(1..=TRACKS_PER_GENRE);
        Song {
            url: format!("{base}/{}-{track}.mp3", genre.id()),
            title: format!("{} Victory Anthem", genre.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_track_builds_library_url() {
        let client = AudioClient::new(AudioConfig {
            library_base_url: "https://bucket.example.com/".to_string(),
        });

        let song = client.select_track(GenreKind::OrchestralEpic);
        assert!(song.url.starts_with("https://bucket.example.com/orchestral-epic-"));
        assert!(song.url.ends_with(".mp3"));
        assert_eq!(song.title, "Orchestral Epic Victory Anthem");
    }

    #[test]
    fn test_selected_track_number_is_in_range() {
        let client = AudioClient::new(AudioConfig {
            library_base_url: "https://bucket.example.com".to_string(),
        });

        for _ in 0..32 {
            let song = client.select_track(GenreKind::RockAnthem);
            let number: u32 = song
                .url
                .trim_end_matches(".mp3")
                .rsplit('-')
                .next()
                .unwrap()
                .parse()
                .unwrap();
            assert!((1..=TRACKS_PER_GENRE).contains(&number));
        }
    }
}
