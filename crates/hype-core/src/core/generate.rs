//! Generation orchestration.
//!
//! `Generator` fronts the three services for the wizard. Every method
//! resolves to a result object: service failures are retried a bounded
//! number of times where the contract asks for it, then replaced by the
//! deterministic local fallback. Nothing here propagates a terminal error.

use std::time::Duration;

use crate::catalog::GenreKind;
use crate::config::{AppMode, Config};
use crate::core::session::{Brief, BriefVariant, CampaignImage, Provenance, Song};
use crate::fallback;
use crate::services::audio::{AudioClient, AudioConfig};
use crate::services::brief::{BriefClient, BriefConfig};
use crate::services::visual::{VisualClient, VisualConfig};

/// Extra attempts after the first failed brief request.
const BRIEF_RETRIES: usize = 1;

/// Summarized image prompts shorter than this are replaced by the fallback
/// prompt.
const MIN_IMAGE_PROMPT_LEN: usize = 20;

/// Orchestrates the generative services for one wizard session.
pub struct Generator {
    simulated_delay: Duration,
    brief: Option<BriefClient>,
    visual: Option<VisualClient>,
    audio: Option<AudioClient>,
}

impl Generator {
    /// Builds a generator from configuration.
    ///
    /// In test mode no clients are constructed and every step is served by
    /// the local generators with simulated latency. In production mode a
    /// client whose credentials cannot be resolved degrades to the fallback
    /// path for that service instead of failing the wizard.
    pub fn from_config(config: &Config) -> Self {
        if config.mode == AppMode::Test {
            return Self {
                simulated_delay: config.simulated_delay(),
                brief: None,
                visual: None,
                audio: None,
            };
        }

        let brief = match BriefConfig::from_env(&config.services.brief) {
            Ok(brief_config) => Some(BriefClient::new(brief_config)),
            Err(err) => {
                tracing::warn!("Brief Service unavailable, using fallback briefs: {err:#}");
                None
            }
        };

        let visual = match VisualConfig::from_env(&config.services.visual) {
            Ok(visual_config) => Some(VisualClient::new(visual_config)),
            Err(err) => {
                tracing::warn!("Visual Service unavailable, using sample visuals: {err:#}");
                None
            }
        };

        let audio = config
            .services
            .audio
            .library_base_url
            .as_deref()
            .map(|base| {
                AudioClient::new(AudioConfig {
                    library_base_url: base.to_string(),
                })
            });
        if audio.is_none() {
            tracing::info!("no track library configured, using placeholder anthems");
        }

        Self {
            simulated_delay: Duration::ZERO,
            brief,
            visual,
            audio,
        }
    }

    /// Overrides the simulated latency (used by exec mode and tests).
    pub fn with_simulated_delay(mut self, delay: Duration) -> Self {
        self.simulated_delay = delay;
        self
    }

    /// Generates the two campaign brief candidates.
    ///
    /// Briefs are generated sequentially, matching the one-request-at-a-time
    /// session model.
    pub async fn generate_briefs(&self, team_name: &str) -> [Brief; 2] {
        self.simulate_latency(1).await;
        let [narrative, strategy] = BriefVariant::all();
        [
            self.brief_for(team_name, narrative).await,
            self.brief_for(team_name, strategy).await,
        ]
    }

    async fn brief_for(&self, team_name: &str, variant: BriefVariant) -> Brief {
        if let Some(client) = &self.brief {
            for attempt in 0..=BRIEF_RETRIES {
                match client.generate_brief(team_name, variant).await {
                    Ok(content) => {
                        return Brief::new(variant, content, Provenance::Service);
                    }
                    Err(err) => {
                        tracing::warn!(
                            variant = variant.id(),
                            attempt,
                            kind = %err.kind,
                            "brief generation failed: {err}"
                        );
                    }
                }
            }
            tracing::warn!(variant = variant.id(), "brief retries exhausted, using fallback");
        }

        Brief::new(
            variant,
            fallback::brief_markdown(team_name, variant),
            Provenance::Fallback,
        )
    }

    /// Generates the campaign visual for the selected brief.
    pub async fn generate_image(
        &self,
        team_name: &str,
        brief_markdown: &str,
    ) -> (CampaignImage, Provenance) {
        self.simulate_latency(2).await;

        let summary = self.image_prompt(team_name, brief_markdown).await;
        let prompt = format!("Create a marketing campaign for {summary}");

        if let Some(client) = &self.visual {
            match client.generate_image(&prompt).await {
                Ok(url) => {
                    return (CampaignImage::new(url, prompt), Provenance::Service);
                }
                Err(err) => {
                    tracing::warn!(
                        kind = %err.kind,
                        "visual generation failed, using sample visual: {err}"
                    );
                }
            }
        }

        (
            CampaignImage::new(fallback::sample_image_url(), prompt),
            Provenance::Fallback,
        )
    }

    async fn image_prompt(&self, team_name: &str, brief_markdown: &str) -> String {
        if let Some(client) = &self.brief {
            match client.summarize_image_prompt(brief_markdown).await {
                Ok(prompt) if prompt.len() >= MIN_IMAGE_PROMPT_LEN => return prompt,
                Ok(prompt) => {
                    tracing::warn!(len = prompt.len(), "image prompt too short, using fallback");
                }
                Err(err) => {
                    tracing::warn!(kind = %err.kind, "image prompt summarization failed: {err}");
                }
            }
        }
        fallback::image_prompt(team_name)
    }

    /// Generates the anthem track for the selected genre.
    pub async fn generate_song(&self, genre: GenreKind) -> (Song, Provenance) {
        self.simulate_latency(3).await;

        if let Some(client) = &self.audio {
            return (client.select_track(genre), Provenance::Service);
        }
        (fallback::placeholder_song(genre), Provenance::Fallback)
    }

    async fn simulate_latency(&self, factor: u32) {
        if !self.simulated_delay.is_zero() {
            tokio::time::sleep(self.simulated_delay * factor).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SAMPLE_IMAGE_URLS;
    use crate::core::session::Session;

    fn offline_generator() -> Generator {
        Generator::from_config(&Config::default()).with_simulated_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_briefs_are_two_distinct_candidates_with_four_themes() {
        let generator = offline_generator();
        let briefs = generator.generate_briefs("Falcons").await;

        assert_eq!(briefs.len(), 2);
        assert_ne!(briefs[0].content, briefs[1].content);
        for brief in &briefs {
            assert!(brief.content.contains("Falcons"));
            assert_eq!(brief.themes.len(), 4);
            assert_eq!(brief.source, Provenance::Fallback);
        }
        assert_eq!(briefs[0].themes[0], "Legacy");
        assert_eq!(briefs[1].themes[0], "Innovation");
    }

    #[tokio::test]
    async fn test_offline_image_comes_from_sample_pool() {
        let generator = offline_generator();
        let (image, source) = generator.generate_image("Falcons", "# Falcons").await;

        assert_eq!(source, Provenance::Fallback);
        assert!(SAMPLE_IMAGE_URLS.contains(&image.url.as_str()));
        assert!(image.prompt.starts_with("Create a marketing campaign for"));
        assert!(image.prompt.contains("Falcons"));
    }

    #[tokio::test]
    async fn test_offline_song_is_placeholder_for_genre() {
        let generator = offline_generator();
        let (song, source) = generator.generate_song(GenreKind::ElectronicHype).await;

        assert_eq!(source, Provenance::Fallback);
        assert_eq!(song.title, "Electronic Hype Anthem");
    }

    /// End-to-end walkthrough: passcode, team name, brief 0, accepted image,
    /// rock anthem.
    #[tokio::test]
    async fn test_full_campaign_walkthrough() {
        let generator = offline_generator();
        let mut session = Session::new();

        session.submit_passcode("KBS2025").unwrap();
        session.finish_loading().unwrap();
        session.submit_team_name("Falcons").unwrap();

        let briefs = generator.generate_briefs(session.team_name()).await;
        session.briefs_ready(briefs).unwrap();
        session.select_brief(0).unwrap();

        let brief = session.selected_brief().unwrap().clone();
        let (image, _) = generator
            .generate_image(session.team_name(), &brief.content)
            .await;
        session.image_ready(image).unwrap();
        session.accept_image().unwrap();

        session.select_genre(GenreKind::RockAnthem).unwrap();
        let (song, _) = generator.generate_song(GenreKind::RockAnthem).await;
        session.song_ready(song).unwrap();

        assert_eq!(session.step(), crate::core::session::Step::Complete);
        assert_eq!(session.selected_brief().unwrap().themes.len(), 4);
        assert_eq!(
            session.selected_genre().map(|genre| genre.id()),
            Some("rock-anthem")
        );
        assert!(session.song().unwrap().title.contains("Anthem"));
    }
}
