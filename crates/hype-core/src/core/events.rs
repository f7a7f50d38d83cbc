//! Wizard event types for the TUI inbox.
//!
//! Events are serializable so a future JSON output mode can reuse them.

use serde::{Deserialize, Serialize};

use crate::core::session::{Brief, CampaignImage, Provenance, Song};

/// Events emitted by generation tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WizardEvent {
    /// Both campaign briefs are available.
    BriefsReady { briefs: [Brief; 2] },

    /// The campaign visual is available.
    ImageReady {
        image: CampaignImage,
        source: Provenance,
    },

    /// The anthem track is available.
    SongReady { song: Song, source: Provenance },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization_is_tagged() {
        let event = WizardEvent::SongReady {
            song: Song {
                url: "https://a/rock-anthem-1.mp3".to_string(),
                title: "Rock Anthem Victory Anthem".to_string(),
            },
            source: Provenance::Service,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"song_ready""#));
        assert!(json.contains(r#""source":"service""#));

        let parsed: WizardEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
