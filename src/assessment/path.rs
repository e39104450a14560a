//! Path generator
//!
//! Walks a rule set in order and collects the modules whose conditions hold.

use std::collections::HashSet;

use super::condition::PathContext;
use super::rules::RuleSet;
use super::types::SkillLevel;

/// Generate the ordered learning path for a learner
///
/// The baseline module always comes first. Rules are evaluated strictly in
/// order and a module is emitted at most once, even if several rules name it.
pub fn generate_path(
    skill_level: SkillLevel,
    goals: &[&str],
    fears: &[&str],
    rules: &RuleSet,
) -> Vec<String> {
    let ctx = PathContext {
        skill_level,
        goals,
        fears,
    };

    let mut seen: HashSet<&str> = HashSet::new();
    let mut path = Vec::with_capacity(rules.rules.len() + 1);

    seen.insert(rules.baseline.as_str());
    path.push(rules.baseline.clone());

    for rule in &rules.rules {
        if seen.contains(rule.module.as_str()) {
            continue;
        }
        if rule.when.evaluate(&ctx) {
            seen.insert(rule.module.as_str());
            path.push(rule.module.clone());
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::condition::Condition;
    use crate::assessment::rules::*;

    #[test]
    fn test_no_tags_intermediate_gets_baseline_only() {
        let path = generate_path(SkillLevel::Intermediate, &[], &[], &RuleSet::builtin());
        assert_eq!(path, vec![VOICE_FOUNDATION_WORKSHOP]);
    }

    #[test]
    fn test_beginner_gets_extended_exercises() {
        let path = generate_path(SkillLevel::Beginner, &[], &[], &RuleSet::builtin());
        assert_eq!(path, vec![VOICE_FOUNDATION_WORKSHOP, EXTENDED_VOICE_EXERCISES]);
    }

    #[test]
    fn test_rule_order_is_preserved() {
        let path = generate_path(
            SkillLevel::Intermediate,
            &["professional_growth"],
            &["questions"],
            &RuleSet::builtin(),
        );
        assert_eq!(
            path,
            vec![
                VOICE_FOUNDATION_WORKSHOP,
                PRESENTATION_DESIGN_MASTERY,
                QA_HANDLING_GUIDE,
                STAGE_PRESENCE_TRAINING,
            ]
        );
    }

    #[test]
    fn test_duplicate_modules_emitted_once() {
        let rules = RuleSet {
            baseline: "Intro".to_string(),
            rules: vec![
                PathRule::new("Drills", Condition::goal("confidence")),
                PathRule::new("Intro", Condition::Always),
                PathRule::new("Drills", Condition::Always),
                PathRule::new("Wrap-up", Condition::Always),
            ],
        };

        let path = generate_path(SkillLevel::Advanced, &[], &[], &rules);
        assert_eq!(path, vec!["Intro", "Drills", "Wrap-up"]);
    }
}
