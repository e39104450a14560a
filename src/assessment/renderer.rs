//! Result rendering
//!
//! Markdown and text output annotate each path module with its catalog
//! objective; JSON output is the result itself.

use std::fmt::Write;

use super::catalog;
use super::types::PersonalizationResult;
use crate::error::{PaceError, Result};

/// Output format for a personalization result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = PaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(PaceError::UnknownFormat(s.to_string())),
        }
    }
}

/// Render a result in the requested format
pub fn render_result(result: &PersonalizationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Markdown => Ok(render_markdown(result)),
        OutputFormat::Text => Ok(render_text(result)),
    }
}

fn render_markdown(result: &PersonalizationResult) -> String {
    let settings = &result.adaptive_settings;
    let mut out = String::new();

    out.push_str("## Your Personalized Learning Path\n\n");
    let _ = writeln!(out, "**Skill level:** {}", result.skill_level);
    let _ = writeln!(
        out,
        "**Pacing:** {} | **Support:** {} | **Practice:** {}",
        settings.pacing.as_str(),
        settings.support_level.as_str(),
        settings.practice_frequency.as_str()
    );
    if !result.preference_tags.is_empty() {
        let _ = writeln!(out, "**Preferences:** {}", result.preference_tags.join(", "));
    }
    if !result.interest_tags.is_empty() {
        let _ = writeln!(out, "**Interests:** {}", result.interest_tags.join(", "));
    }

    out.push_str("\n### Modules\n\n");
    for (i, module) in result.learning_path.iter().enumerate() {
        match catalog::lookup(module) {
            Some(entry) => {
                let duration = entry
                    .duration_minutes
                    .map(|m| format!(" ({} min)", m))
                    .unwrap_or_default();
                let _ = writeln!(
                    out,
                    "{}. **{}**{} - {}",
                    i + 1,
                    module,
                    duration,
                    entry.objective
                );
            }
            None => {
                let _ = writeln!(out, "{}. **{}**", i + 1, module);
            }
        }
    }

    if let Some(estimate) = estimate_line(&result.learning_path) {
        let _ = write!(out, "\n{}", estimate);
    }

    out.trim_end().to_string()
}

fn render_text(result: &PersonalizationResult) -> String {
    let settings = &result.adaptive_settings;
    let mut out = String::new();

    let _ = writeln!(out, "Skill level:  {}", result.skill_level);
    let _ = writeln!(out, "Pacing:       {}", settings.pacing.as_str());
    let _ = writeln!(out, "Support:      {}", settings.support_level.as_str());
    let _ = writeln!(out, "Practice:     {}", settings.practice_frequency.as_str());
    let _ = writeln!(out, "Preferences:  {}", join_or_none(&result.preference_tags));
    let _ = writeln!(out, "Interests:    {}", join_or_none(&result.interest_tags));
    out.push_str("\nLearning path:\n");
    for (i, module) in result.learning_path.iter().enumerate() {
        match catalog::lookup(module) {
            Some(entry) => {
                let duration = entry
                    .duration_minutes
                    .map(|m| format!(" ({} min)", m))
                    .unwrap_or_default();
                let _ = writeln!(out, "  {:>2}. {}{}", i + 1, module, duration);
                let _ = writeln!(out, "      {}", entry.objective);
            }
            None => {
                let _ = writeln!(out, "  {:>2}. {}", i + 1, module);
            }
        }
    }

    if let Some(estimate) = estimate_line(&result.learning_path) {
        let _ = write!(out, "\n{}", estimate);
    }

    out.trim_end().to_string()
}

fn estimate_line(path: &[String]) -> Option<String> {
    let minutes = catalog::estimated_minutes(path);
    if minutes == 0 {
        return None;
    }
    if catalog::includes_workshop_block(path) {
        Some(format!(
            "Estimated core lesson time: {} min (includes the {} min workshop block)",
            minutes,
            catalog::WORKSHOP_BLOCK_MINUTES
        ))
    } else {
        Some(format!("Estimated core lesson time: {} min", minutes))
    }
}

fn join_or_none(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(", ")
    }
}
