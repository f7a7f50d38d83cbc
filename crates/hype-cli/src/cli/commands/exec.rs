//! Exec command handler: one-shot campaign generation.
//!
//! Runs the same controller and services as the wizard, without the TUI,
//! and prints the composed campaign page as markdown to stdout.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use hype_core::catalog::GenreKind;
use hype_core::config::Config;
use hype_core::core::generate::Generator;
use hype_core::core::session::{Provenance, Session};
use hype_core::services::ServiceKind;

pub struct ExecRunOptions<'a> {
    pub config: &'a Config,
    pub team: &'a str,
    pub passcode: &'a str,
    /// 1-based brief candidate choice.
    pub brief_choice: usize,
    pub genre_id: &'a str,
}

pub async fn run(options: ExecRunOptions<'_>) -> Result<()> {
    let brief_index = match options.brief_choice {
        1 | 2 => options.brief_choice - 1,
        other => bail!("--brief must be 1 or 2, got {other}"),
    };
    let genre = GenreKind::from_id(options.genre_id)
        .with_context(|| format!("unknown genre '{}' (see `hype genres`)", options.genre_id))?;

    let mut session = Session::new();
    session
        .submit_passcode(options.passcode)
        .context("authenticate")?;
    session.finish_loading()?;
    session.submit_team_name(options.team)?;

    // exec mode skips the simulated test-mode latency
    let generator =
        Generator::from_config(options.config).with_simulated_delay(Duration::ZERO);

    let briefs = generator.generate_briefs(session.team_name()).await;
    session.briefs_ready(briefs)?;
    session.select_brief(brief_index)?;

    let brief_markdown = session
        .selected_brief()
        .map(|brief| brief.content.clone())
        .unwrap_or_default();
    let (image, image_source) = generator
        .generate_image(session.team_name(), &brief_markdown)
        .await;
    session.image_ready(image)?;
    session.accept_image()?;

    session.select_genre(genre)?;
    let (song, _) = generator.generate_song(genre).await;
    session.song_ready(song)?;

    print!("{}", campaign_page(&session, image_source)?);
    Ok(())
}

/// Composes the final campaign page as markdown.
fn campaign_page(session: &Session, image_source: Provenance) -> Result<String> {
    let brief = session.selected_brief().context("missing selected brief")?;
    let image = session.image().context("missing campaign visual")?;
    let genre = session.selected_genre().context("missing genre")?;
    let song = session.song().context("missing anthem")?;

    let mut page = String::new();
    page.push_str(&format!("# {} Campaign\n\n", session.team_name()));

    page.push_str(&format!(
        "## Strategic Brief\n\n*Powered by {}*\n\n",
        ServiceKind::Brief.vendor_label()
    ));
    page.push_str(&brief.content);
    page.push_str("\n\n**Campaign themes:** ");
    page.push_str(&brief.themes.join(" · "));
    page.push_str("\n\n---\n\n");

    page.push_str(&format!(
        "## Campaign Visual\n\n*Powered by {}*\n\n",
        ServiceKind::Visual.vendor_label()
    ));
    let caption = match image_source {
        Provenance::Service => "Campaign Visual",
        Provenance::Fallback => "Campaign Visual (sample)",
    };
    page.push_str(&format!("![{caption}]({})\n\n", image.url));
    page.push_str(&format!("Prompt: {}\n\n---\n\n", image.prompt));

    page.push_str(&format!(
        "## Victory Anthem\n\n*Powered by {}*\n\n",
        ServiceKind::Audio.vendor_label()
    ));
    page.push_str(&format!("**{}**\n\n", song.title));
    page.push_str(&format!("- Genre: {}\n", genre.name()));
    page.push_str(&format!("- Style: {}\n", genre.description()));
    page.push_str(&format!("- Track: {}\n\n", song.url));

    page.push_str(&format!(
        "Generated at {}\n",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    ));
    Ok(page)
}
