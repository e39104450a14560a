//! Rules command
//!
//! Prints the effective rule set, or checks a project rules file.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::assessment::catalog;
use crate::assessment::loader::{load_rule_set, load_rules_file, merge_rules, CliOverrides};
use crate::assessment::RuleSet;
use crate::config::Config;

/// Options for the rules command
#[derive(Debug, Clone, Default)]
pub struct RulesOptions {
    /// Project rules file (overrides the config)
    pub rules: Option<PathBuf>,
    /// Validate this rules file instead of listing
    pub check: Option<PathBuf>,
    /// Output the rule set as JSON
    pub json: bool,
}

/// Execute the rules command
pub fn execute_rules(options: RulesOptions, config: &Config) -> Result<()> {
    if let Some(path) = &options.check {
        let rules = check_rules_file(path)?;
        println!(
            "{} {} is valid ({} rules after merge)",
            style("✓").green(),
            path.display(),
            rules.rules.len()
        );
        return Ok(());
    }

    let rules_path = options.rules.clone().unwrap_or_else(|| config.rules.clone());
    let cli = CliOverrides {
        exclude: config.exclude.clone(),
    };
    let rules = load_rule_set(Some(&rules_path), &cli)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    println!("Learning path rules ({}):\n", rules.rules.len() + 1);
    println!(
        "  {:2} {} {}",
        1,
        style(format!("{:36}", rules.baseline)).bold(),
        style("always (baseline)").dim()
    );
    for (i, rule) in rules.rules.iter().enumerate() {
        let timed = catalog::lookup(&rule.module)
            .and_then(|e| e.duration_minutes)
            .map(|m| format!(" ~{} min", m))
            .unwrap_or_default();
        println!("  {:2} {:36} {}{}", i + 2, rule.module, rule.when, timed);
    }

    Ok(())
}

/// Parse a rules file and merge it over the built-in rules
pub fn check_rules_file(path: &std::path::Path) -> Result<RuleSet> {
    let project = load_rules_file(path)?;
    merge_rules(RuleSet::builtin(), project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_check_valid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rules.json");
        std::fs::write(
            &path,
            r#"{ "additionalRules": [ { "module": "Pitch Practice", "when": "always" } ] }"#,
        )
        .unwrap();

        let rules = check_rules_file(&path).unwrap();
        assert!(rules.contains_module("Pitch Practice"));
    }

    #[test]
    fn test_check_rejects_disabled_baseline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rules.json");
        std::fs::write(
            &path,
            r#"{ "disabledModules": ["Voice Foundation Workshop"] }"#,
        )
        .unwrap();

        assert!(check_rules_file(&path).is_err());
    }
}
