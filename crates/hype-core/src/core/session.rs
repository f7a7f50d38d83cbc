//! Per-session wizard state machine.
//!
//! `Session` owns the campaign data and the current `Step`, and is the only
//! place transitions happen. Every trigger validates the current step first:
//! an out-of-order trigger returns `WizardError::InvalidTransition` and
//! leaves the session untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::GenreKind;

/// The shared access passcode. Matched case-insensitively; there is no
/// lockout, rate limiting, or expiry.
const ACCESS_PASSCODE: &str = "kbs2025";

/// The wizard's position in its fixed linear sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Auth,
    Loading,
    Input,
    GeneratingBriefs,
    BriefSelection,
    GeneratingImages,
    ImageSelection,
    GenreSelection,
    GeneratingSong,
    Complete,
}

impl Step {
    /// Returns the string identifier used in logs and events.
    pub fn id(&self) -> &'static str {
        match self {
            Step::Auth => "auth",
            Step::Loading => "loading",
            Step::Input => "input",
            Step::GeneratingBriefs => "generating_briefs",
            Step::BriefSelection => "brief_selection",
            Step::GeneratingImages => "generating_images",
            Step::ImageSelection => "image_selection",
            Step::GenreSelection => "genre_selection",
            Step::GeneratingSong => "generating_song",
            Step::Complete => "complete",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Where a generated artifact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Produced by the external generative service.
    Service,
    /// Produced by the local deterministic fallback generator.
    Fallback,
}

/// The two brief variants requested per campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BriefVariant {
    /// Narrative-led: legacy, community, excellence, passion.
    Narrative,
    /// Strategy-led: innovation, unity, resilience, championship.
    Strategy,
}

impl BriefVariant {
    /// Returns both variants in generation order.
    pub fn all() -> [BriefVariant; 2] {
        [BriefVariant::Narrative, BriefVariant::Strategy]
    }

    pub fn id(&self) -> &'static str {
        match self {
            BriefVariant::Narrative => "narrative",
            BriefVariant::Strategy => "strategy",
        }
    }

    /// Returns the fixed theme tags for this variant.
    pub fn themes(&self) -> [&'static str; 4] {
        match self {
            BriefVariant::Narrative => ["Legacy", "Community", "Excellence", "Passion"],
            BriefVariant::Strategy => ["Innovation", "Unity", "Resilience", "Championship"],
        }
    }
}

/// A generated marketing narrative document. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    pub id: String,
    /// Markdown body.
    pub content: String,
    /// Fixed provenance tag.
    pub source: Provenance,
    /// Exactly four ordered theme tags.
    pub themes: [String; 4],
}

impl Brief {
    /// Builds a brief for a variant, stamping its fixed themes.
    pub fn new(variant: BriefVariant, content: String, source: Provenance) -> Self {
        Self {
            id: format!("brief-{}-{}", variant.id(), uuid::Uuid::new_v4()),
            content,
            source,
            themes: variant.themes().map(str::to_string),
        }
    }
}

/// A generated campaign visual. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignImage {
    pub id: String,
    pub url: String,
    /// The prompt the visual was generated from.
    pub prompt: String,
}

impl CampaignImage {
    pub fn new(url: String, prompt: String) -> Self {
        Self {
            id: format!("image-{}", uuid::Uuid::new_v4()),
            url,
            prompt,
        }
    }
}

/// A generated anthem track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub url: String,
    pub title: String,
}

/// Errors returned by wizard triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    /// The trigger does not apply to the session's current step.
    InvalidTransition {
        step: Step,
        trigger: &'static str,
    },
    /// The passcode did not match.
    InvalidPasscode,
    /// The submitted team name was empty or whitespace-only.
    EmptyTeamName,
    /// The brief index was not 0 or 1.
    InvalidBriefIndex(usize),
}

impl fmt::Display for WizardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WizardError::InvalidTransition { step, trigger } => {
                write!(f, "trigger '{trigger}' is not valid in step '{step}'")
            }
            WizardError::InvalidPasscode => write!(f, "invalid passcode"),
            WizardError::EmptyTeamName => write!(f, "team name must not be empty"),
            WizardError::InvalidBriefIndex(index) => {
                write!(f, "brief index {index} out of range")
            }
        }
    }
}

impl std::error::Error for WizardError {}

/// One wizard session: current step plus all campaign data.
///
/// There is no global session; callers own one `Session` per interaction and
/// pass it through the controller.
#[derive(Debug, Clone)]
pub struct Session {
    step: Step,
    authenticated: bool,
    team_name: String,
    briefs: Vec<Brief>,
    selected_brief: Option<Brief>,
    image: Option<CampaignImage>,
    selected_genre: Option<GenreKind>,
    song: Option<Song>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            step: Step::Auth,
            authenticated: false,
            team_name: String::new(),
            briefs: Vec::new(),
            selected_brief: None,
            image: None,
            selected_genre: None,
            song: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn team_name(&self) -> &str {
        &self.team_name
    }

    pub fn briefs(&self) -> &[Brief] {
        &self.briefs
    }

    pub fn selected_brief(&self) -> Option<&Brief> {
        self.selected_brief.as_ref()
    }

    pub fn image(&self) -> Option<&CampaignImage> {
        self.image.as_ref()
    }

    pub fn selected_genre(&self) -> Option<GenreKind> {
        self.selected_genre
    }

    pub fn song(&self) -> Option<&Song> {
        self.song.as_ref()
    }

    fn require_step(&self, expected: Step, trigger: &'static str) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                step: self.step,
                trigger,
            })
        }
    }

    /// `auth` → `loading` on a matching passcode.
    ///
    /// The match is a case-insensitive exact comparison against the fixed
    /// shared passcode. A mismatch leaves the session in `auth`.
    pub fn submit_passcode(&mut self, passcode: &str) -> Result<(), WizardError> {
        self.require_step(Step::Auth, "submit_passcode")?;
        if !passcode.trim().eq_ignore_ascii_case(ACCESS_PASSCODE) {
            return Err(WizardError::InvalidPasscode);
        }
        self.authenticated = true;
        self.step = Step::Loading;
        tracing::info!(step = %self.step, "authenticated");
        Ok(())
    }

    /// `loading` → `input` once the splash delay has elapsed.
    pub fn finish_loading(&mut self) -> Result<(), WizardError> {
        self.require_step(Step::Loading, "finish_loading")?;
        self.step = Step::Input;
        Ok(())
    }

    /// `input` → `generating_briefs` with a non-empty team name.
    pub fn submit_team_name(&mut self, team_name: &str) -> Result<(), WizardError> {
        self.require_step(Step::Input, "submit_team_name")?;
        let trimmed = team_name.trim();
        if trimmed.is_empty() {
            return Err(WizardError::EmptyTeamName);
        }
        self.team_name = trimmed.to_string();
        self.step = Step::GeneratingBriefs;
        tracing::info!(team = %self.team_name, "team name submitted");
        Ok(())
    }

    /// `generating_briefs` → `brief_selection` with the two candidates.
    pub fn briefs_ready(&mut self, briefs: [Brief; 2]) -> Result<(), WizardError> {
        self.require_step(Step::GeneratingBriefs, "briefs_ready")?;
        self.briefs = briefs.into();
        self.step = Step::BriefSelection;
        Ok(())
    }

    /// `brief_selection` → `generating_images` with the chosen brief.
    pub fn select_brief(&mut self, index: usize) -> Result<(), WizardError> {
        self.require_step(Step::BriefSelection, "select_brief")?;
        let brief = self
            .briefs
            .get(index)
            .ok_or(WizardError::InvalidBriefIndex(index))?;
        self.selected_brief = Some(brief.clone());
        self.step = Step::GeneratingImages;
        tracing::info!(index, "brief selected");
        Ok(())
    }

    /// `generating_images` → `image_selection` with the generated visual.
    pub fn image_ready(&mut self, image: CampaignImage) -> Result<(), WizardError> {
        self.require_step(Step::GeneratingImages, "image_ready")?;
        self.image = Some(image);
        self.step = Step::ImageSelection;
        Ok(())
    }

    /// `image_selection` → `generating_images`, discarding the current
    /// visual. The selected brief is untouched.
    pub fn regenerate_image(&mut self) -> Result<(), WizardError> {
        self.require_step(Step::ImageSelection, "regenerate_image")?;
        self.image = None;
        self.step = Step::GeneratingImages;
        tracing::info!("visual discarded for regeneration");
        Ok(())
    }

    /// `image_selection` → `genre_selection`, keeping the current visual.
    pub fn accept_image(&mut self) -> Result<(), WizardError> {
        self.require_step(Step::ImageSelection, "accept_image")?;
        if self.image.is_none() {
            return Err(WizardError::InvalidTransition {
                step: self.step,
                trigger: "accept_image",
            });
        }
        self.step = Step::GenreSelection;
        Ok(())
    }

    /// `genre_selection` → `generating_song` with the chosen genre.
    pub fn select_genre(&mut self, genre: GenreKind) -> Result<(), WizardError> {
        self.require_step(Step::GenreSelection, "select_genre")?;
        self.selected_genre = Some(genre);
        self.step = Step::GeneratingSong;
        tracing::info!(genre = genre.id(), "genre selected");
        Ok(())
    }

    /// `generating_song` → `complete` with the anthem track.
    pub fn song_ready(&mut self, song: Song) -> Result<(), WizardError> {
        self.require_step(Step::GeneratingSong, "song_ready")?;
        self.song = Some(song);
        self.step = Step::Complete;
        Ok(())
    }

    /// `complete` → `input`: resets all campaign data, keeps authentication.
    pub fn new_campaign(&mut self) -> Result<(), WizardError> {
        self.require_step(Step::Complete, "new_campaign")?;
        self.team_name.clear();
        self.briefs.clear();
        self.selected_brief = None;
        self.image = None;
        self.selected_genre = None;
        self.song = None;
        self.step = Step::Input;
        tracing::info!("session reset for new campaign");
        Ok(())
    }
}
