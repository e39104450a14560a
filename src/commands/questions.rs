//! Questions command - print the assessment question catalog

use anyhow::Result;
use console::style;

use crate::assessment::questions::{QuestionKind, QUESTIONS};

/// Execute the questions command
pub fn execute_questions(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(QUESTIONS)?);
        return Ok(());
    }

    for question in QUESTIONS {
        let kind = match question.kind {
            QuestionKind::Single => "single",
            QuestionKind::Multi => "multi",
        };
        println!(
            "{} {} ({})",
            style(question.id).cyan().bold(),
            question.prompt,
            style(kind).dim()
        );
        for option in question.options {
            println!("    {:22} {}", option.id, style(option.label).dim());
        }
        println!();
    }

    Ok(())
}
