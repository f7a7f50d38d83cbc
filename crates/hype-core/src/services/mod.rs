//! Generative service clients.

pub mod audio;
pub mod brief;
pub mod shared;
pub mod visual;

pub use shared::{
    ServiceError, ServiceErrorKind, ServiceResult, resolve_api_key, resolve_api_key_with_alias,
    resolve_base_url,
};

/// The three external generative collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Brief,
    Visual,
    Audio,
}

impl ServiceKind {
    /// Returns the string identifier used in config sections and logs.
    pub fn id(&self) -> &'static str {
        match self {
            ServiceKind::Brief => "brief",
            ServiceKind::Visual => "visual",
            ServiceKind::Audio => "audio",
        }
    }

    /// Returns the human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Brief => "Brief Service",
            ServiceKind::Visual => "Visual Service",
            ServiceKind::Audio => "Audio Service",
        }
    }

    /// Returns the vendor credit shown on generation screens.
    pub fn vendor_label(&self) -> &'static str {
        match self {
            ServiceKind::Brief => "OpenAI",
            ServiceKind::Visual => "Leonardo AI",
            ServiceKind::Audio => "Suno AI",
        }
    }
}
