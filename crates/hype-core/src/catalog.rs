//! Static catalogs: the four anthem genres and the sample visual pool.

use serde::{Deserialize, Serialize};

/// The fixed anthem genre catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenreKind {
    RockAnthem,
    ElectronicHype,
    OrchestralEpic,
    InspirationalPop,
}

impl GenreKind {
    /// Returns all genres in display order.
    pub fn all() -> &'static [GenreKind] {
        &[
            GenreKind::RockAnthem,
            GenreKind::ElectronicHype,
            GenreKind::OrchestralEpic,
            GenreKind::InspirationalPop,
        ]
    }

    /// Returns the string identifier used in requests and the track library.
    pub fn id(&self) -> &'static str {
        match self {
            GenreKind::RockAnthem => "rock-anthem",
            GenreKind::ElectronicHype => "electronic-hype",
            GenreKind::OrchestralEpic => "orchestral-epic",
            GenreKind::InspirationalPop => "inspirational-pop",
        }
    }

    /// Returns the `GenreKind` for a given id string.
    pub fn from_id(id: &str) -> Option<GenreKind> {
        match id.to_lowercase().as_str() {
            "rock-anthem" => Some(GenreKind::RockAnthem),
            "electronic-hype" => Some(GenreKind::ElectronicHype),
            "orchestral-epic" => Some(GenreKind::OrchestralEpic),
            "inspirational-pop" => Some(GenreKind::InspirationalPop),
            _ => None,
        }
    }

    /// Returns the human-readable name for display.
    pub fn name(&self) -> &'static str {
        match self {
            GenreKind::RockAnthem => "Rock Anthem",
            GenreKind::ElectronicHype => "Electronic Hype",
            GenreKind::OrchestralEpic => "Orchestral Epic",
            GenreKind::InspirationalPop => "Inspirational Pop",
        }
    }

    /// Returns the one-line description shown in the genre picker.
    pub fn description(&self) -> &'static str {
        match self {
            GenreKind::RockAnthem => {
                "High-energy rock with powerful vocals and driving guitar riffs perfect for victory celebrations"
            }
            GenreKind::ElectronicHype => {
                "Modern electronic beats with synthetic energy to pump up crowds and create excitement"
            }
            GenreKind::OrchestralEpic => {
                "Cinematic orchestral composition with dramatic crescendos for triumphant moments"
            }
            GenreKind::InspirationalPop => {
                "Uplifting pop melody with emotional lyrics that resonates with fans of all ages"
            }
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            GenreKind::RockAnthem => "⚡",
            GenreKind::ElectronicHype => "🎵",
            GenreKind::OrchestralEpic => "🎼",
            GenreKind::InspirationalPop => "❤️",
        }
    }
}

/// Fixed pool of sample visuals used when the Visual Service is unavailable.
pub const SAMPLE_IMAGE_URLS: [&str; 5] = [
    "https://images.pexels.com/photos/358042/pexels-photo-358042.jpeg",
    "https://images.pexels.com/photos/1752757/pexels-photo-1752757.jpeg",
    "https://images.pexels.com/photos/1884574/pexels-photo-1884574.jpeg",
    "https://images.pexels.com/photos/262524/pexels-photo-262524.jpeg",
    "https://images.pexels.com/photos/1884576/pexels-photo-1884576.jpeg",
];
