//! Assess command
//!
//! Collects answers (file, `question=value` pairs, interactive prompts),
//! validates them, and prints the personalized learning path.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, MultiSelect, Select};

use crate::assessment::questions::{Question, QuestionKind, QUESTIONS};
use crate::assessment::{
    answers_from_pairs, load_rule_set, render_result, synthesize_with, validate_answers, Answer,
    AnswerSet, CliOverrides, OutputFormat, PersonalizationResult,
};
use crate::config::Config;
use crate::error::PaceError;

/// Options for the assess command
#[derive(Debug, Clone, Default)]
pub struct AssessOptions {
    /// JSON answers file ("-" reads stdin)
    pub answers: Option<PathBuf>,
    /// Inline `question=value` answers, applied after the file
    pub pairs: Vec<String>,
    /// Prompt for unanswered questions
    pub interactive: bool,
    /// Project rules file (overrides the config)
    pub rules: Option<PathBuf>,
    /// Modules to drop from the path
    pub exclude: Vec<String>,
    /// Output format (falls back to the config)
    pub format: Option<OutputFormat>,
    /// Fail on answer validation issues
    pub strict: bool,
    /// Write output to a file instead of stdout
    pub output: Option<PathBuf>,
}

/// Execute the assess command
pub fn execute_assess(options: AssessOptions, config: &Config) -> Result<()> {
    let format = match options.format {
        Some(format) => format,
        None => config.format.parse::<OutputFormat>()?,
    };

    let result = run_assessment(&options, config)?;
    let rendered = render_result(&result, format)?;

    match &options.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write result to {:?}", path))?;
            eprintln!("{} Wrote {}", style("✓").green(), path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Collect, validate and synthesize; everything except output
pub fn run_assessment(options: &AssessOptions, config: &Config) -> Result<PersonalizationResult> {
    let mut answers = match &options.answers {
        Some(path) => read_answers(path)?,
        None => AnswerSet::new(),
    };
    answers.merge(answers_from_pairs(&options.pairs)?);

    if options.interactive {
        collect_interactive(&mut answers)?;
    }
    tracing::debug!("Collected {} answer(s)", answers.len());

    let issues = validate_answers(&answers);
    if !issues.is_empty() {
        if options.strict || config.strict {
            let messages = issues.iter().map(|i| i.to_string()).collect();
            return Err(PaceError::InvalidAnswers(messages).into());
        }
        for issue in &issues {
            tracing::warn!("{}", issue);
        }
    }

    let rules_path = match &options.rules {
        Some(path) if !path.exists() => bail!("Rules file not found: {}", path.display()),
        Some(path) => path.clone(),
        None => config.rules.clone(),
    };
    let cli = CliOverrides {
        exclude: config
            .exclude
            .iter()
            .chain(options.exclude.iter())
            .cloned()
            .collect(),
    };
    let rules = load_rule_set(Some(&rules_path), &cli)?;

    Ok(synthesize_with(&answers, &rules))
}

fn read_answers(path: &Path) -> Result<AnswerSet> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read answers from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read answers from {:?}", path))?
    };
    serde_json::from_str(&json).with_context(|| format!("Failed to parse answers from {:?}", path))
}

/// Catalog questions the answer set has no answer for, in catalog order
fn pending_questions(answers: &AnswerSet) -> Vec<&'static Question> {
    QUESTIONS
        .iter()
        .filter(|q| answers.get(q.id).is_none())
        .collect()
}

/// Prompt for every question not already answered; Esc skips a question
fn collect_interactive(answers: &mut AnswerSet) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{} PACE Assessment\n", style("→").cyan());

    for question in pending_questions(answers) {
        let labels: Vec<&str> = question.options.iter().map(|o| o.label).collect();

        match question.kind {
            QuestionKind::Single => {
                let choice = Select::with_theme(&theme)
                    .with_prompt(question.prompt)
                    .items(&labels)
                    .default(0)
                    .interact_opt()?;
                if let Some(idx) = choice {
                    answers.record(question.id, question.options[idx].id);
                }
            }
            QuestionKind::Multi => {
                let choices = MultiSelect::with_theme(&theme)
                    .with_prompt(question.prompt)
                    .items(&labels)
                    .interact_opt()?;
                if let Some(indices) = choices.filter(|c| !c.is_empty()) {
                    let selected = indices
                        .iter()
                        .map(|&idx| question.options[idx].id.to_string())
                        .collect();
                    answers.record(question.id, Answer::Multi(selected));
                }
            }
        }
    }
    println!();

    Ok(())
}
