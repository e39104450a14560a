//! Init command
//!
//! Writes `.pace.config.json` and, optionally, a starter project rules file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::assessment::loader::RulesFile;
use crate::config::{Config, DEFAULT_CONFIG_PATH};

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Force overwrite existing config
    pub force: bool,
    /// Skip interactive prompts
    pub yes: bool,
    /// Directory to initialize (defaults to the current directory)
    pub root: Option<PathBuf>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let root = options.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let config_path = root.join(DEFAULT_CONFIG_PATH);

    if config_path.exists() && !options.force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    let mut config = Config::default();
    let write_rules = if options.yes {
        true
    } else {
        run_interactive_init(&mut config)?
    };

    config.save(&config_path)?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    if write_rules {
        let rules_path = root.join(&config.rules);
        if write_starter_rules(&rules_path)? {
            println!("{} Created {}", style("✓").green(), rules_path.display());
        }
    }

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Run {} to take the assessment",
        style("pace assess --interactive").cyan()
    );
    println!(
        "  2. Customize path rules in {}",
        style(config.rules.display()).cyan()
    );

    Ok(())
}

fn run_interactive_init(config: &mut Config) -> Result<bool> {
    println!("{} PACE Project Setup\n", style("→").cyan());

    let formats = ["markdown", "text", "json"];
    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Default output format")
        .items(&formats)
        .default(0)
        .interact()?;
    config.format = formats[idx].to_string();

    config.strict = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Reject answers that don't match the question catalog?")
        .default(false)
        .interact()?;

    let write_rules = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Create a starter rules file?")
        .default(true)
        .interact()?;

    Ok(write_rules)
}

/// Write an empty rules file; an existing file is left alone
fn write_starter_rules(path: &Path) -> Result<bool> {
    if path.exists() {
        tracing::info!("Keeping existing rules file {:?}", path);
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let starter = RulesFile {
        version: Some("1.0.0".to_string()),
        ..Default::default()
    };
    std::fs::write(path, serde_json::to_string_pretty(&starter)?)?;
    Ok(true)
}
