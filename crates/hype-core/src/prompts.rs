//! Prompt template helpers.

use minijinja::{Environment, context};

/// System prompt for brief generation.
pub const BRIEF_SYSTEM_PROMPT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/brief_system_prompt.md"
));

/// User prompt template for the narrative-led brief variant (`MiniJinja`).
pub const BRIEF_NARRATIVE_PROMPT_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/brief_narrative_prompt.md"
));

/// User prompt template for the strategy-led brief variant (`MiniJinja`).
pub const BRIEF_STRATEGY_PROMPT_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/brief_strategy_prompt.md"
));

/// System prompt for summarizing a brief into an image prompt.
pub const IMAGE_PROMPT_SYSTEM: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/image_prompt_system.md"
));

/// Fallback brief template, narrative variant (`MiniJinja`).
pub const FALLBACK_BRIEF_NARRATIVE_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/fallback_brief_narrative.md"
));

/// Fallback brief template, strategy variant (`MiniJinja`).
pub const FALLBACK_BRIEF_STRATEGY_TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/fallback_brief_strategy.md"
));

/// Renders a template that takes the team name as its only variable.
///
/// Template errors are logged and degrade to a minimal heading so callers
/// stay infallible.
pub fn render_team_template(template: &str, team_name: &str) -> String {
    let env = Environment::new();
    match env.render_str(template, context! { team_name }) {
        Ok(rendered) => rendered.trim().to_string(),
        Err(err) => {
            tracing::error!("prompt template render failed: {err}");
            format!("# {team_name}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_team_template_substitutes_name() {
        let rendered = render_team_template(BRIEF_NARRATIVE_PROMPT_TEMPLATE, "Falcons");
        assert!(rendered.contains("\"Falcons\""));
        assert!(rendered.contains("# Falcons"));
        assert!(!rendered.contains("{{"));
    }

    #[test]
    fn test_fallback_templates_substitute_name() {
        for template in [
            FALLBACK_BRIEF_NARRATIVE_TEMPLATE,
            FALLBACK_BRIEF_STRATEGY_TEMPLATE,
        ] {
            let rendered = render_team_template(template, "River City Rockets");
            assert!(rendered.starts_with("# River City Rockets"));
            assert!(!rendered.contains("{{"));
        }
    }
}
