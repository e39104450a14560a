//! Rule set loader
//!
//! Builds the effective rule set from three layers:
//! 1. Built-in curriculum rules
//! 2. Project rules file (e.g. `.pace/rules.json`)
//! 3. CLI overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::rules::{PathRule, RuleSet};
use crate::error::PaceError;

/// CLI overrides for the rule set
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Modules to drop from the path
    pub exclude: Vec<String>,
}

/// Project customization file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesFile {
    #[serde(default)]
    pub version: Option<String>,

    /// Replaces the baseline module
    #[serde(default)]
    pub baseline: Option<String>,

    /// Replace rules by module name, or append when the module is new
    #[serde(default)]
    pub rules: Vec<PathRule>,

    /// Always appended after existing rules
    #[serde(default)]
    pub additional_rules: Vec<PathRule>,

    #[serde(default)]
    pub disabled_modules: Vec<String>,
}

/// Load the effective rule set
pub fn load_rule_set(project_rules: Option<&Path>, cli: &CliOverrides) -> Result<RuleSet> {
    let mut rules = RuleSet::builtin();

    if let Some(path) = project_rules {
        if path.exists() {
            let project = load_rules_file(path)?;
            rules = merge_rules(rules, project)?;
        } else {
            tracing::debug!("No project rules at {:?}, using built-in rules", path);
        }
    }

    apply_cli_overrides(rules, cli)
}

/// Read and parse a project rules file
pub fn load_rules_file(path: &Path) -> Result<RulesFile> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules from {:?}", path))?;
    serde_json::from_str(&json).with_context(|| format!("Failed to parse rules from {:?}", path))
}

/// Merge a project rules file into a base rule set
pub fn merge_rules(base: RuleSet, project: RulesFile) -> Result<RuleSet> {
    let mut result = base;

    if let Some(baseline) = project.baseline {
        // A rule for the new baseline would only ever be skipped
        result.rules.retain(|r| r.module != baseline);
        result.baseline = baseline;
    }

    for rule in project.rules {
        if let Some(existing) = result.rules.iter_mut().find(|r| r.module == rule.module) {
            *existing = rule;
        } else {
            result.rules.push(rule);
        }
    }

    result.rules.extend(project.additional_rules);

    disable_modules(&mut result, &project.disabled_modules)?;

    Ok(result)
}

fn apply_cli_overrides(mut rules: RuleSet, cli: &CliOverrides) -> Result<RuleSet> {
    disable_modules(&mut rules, &cli.exclude)?;
    Ok(rules)
}

fn disable_modules(rules: &mut RuleSet, modules: &[String]) -> Result<()> {
    for module in modules {
        if *module == rules.baseline {
            return Err(PaceError::BaselineDisabled(module.clone()).into());
        }
        if !rules.contains_module(module) {
            tracing::warn!("Disabled module not in rule set: {}", module);
            continue;
        }
        rules.rules.retain(|r| &r.module != module);
    }
    Ok(())
}
