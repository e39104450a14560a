//! Result synthesizer
//!
//! Turns a (possibly partial) answer set into a fully populated
//! [`PersonalizationResult`]. Missing or unrecognised answers fall back to
//! defaults; nothing here can fail.

use std::collections::HashSet;

use super::path::generate_path;
use super::questions::{
    EXPERIENCE, FEARS, GOALS, LEARNING_STYLE, PACE_PREFERENCE, PRACTICE_FREQUENCY, SUPPORT_NEEDED,
};
use super::rules::RuleSet;
use super::types::*;

/// Synthesize a result using the built-in rule set
pub fn synthesize(answers: &AnswerSet) -> PersonalizationResult {
    synthesize_with(answers, &RuleSet::builtin())
}

/// Synthesize a result using a caller-supplied rule set
pub fn synthesize_with(answers: &AnswerSet, rules: &RuleSet) -> PersonalizationResult {
    let skill_level = answers
        .single(EXPERIENCE)
        .and_then(SkillLevel::from_id)
        .unwrap_or_default();

    let goals = distinct(answers.multi(GOALS));
    let fears = distinct(answers.multi(FEARS));

    let mut preference_tags = Vec::with_capacity(fears.len() + 1);
    if let Some(style) = answers.single(LEARNING_STYLE) {
        preference_tags.push(style.to_string());
    }
    preference_tags.extend(fears.iter().map(|f| f.to_string()));

    let learning_path = generate_path(skill_level, &goals, &fears, rules);

    let adaptive_settings = AdaptiveSettings {
        pacing: answers
            .single(PACE_PREFERENCE)
            .and_then(Pacing::from_id)
            .unwrap_or_default(),
        support_level: answers
            .single(SUPPORT_NEEDED)
            .and_then(SupportLevel::from_id)
            .unwrap_or_default(),
        practice_frequency: answers
            .single(PRACTICE_FREQUENCY)
            .and_then(PracticeFrequency::from_id)
            .unwrap_or_default(),
    };

    PersonalizationResult {
        skill_level,
        preference_tags,
        interest_tags: goals.iter().map(|g| g.to_string()).collect(),
        adaptive_settings,
        learning_path,
    }
}

/// Multi-select answers are sets; repeats after the first are dropped
fn distinct(tags: Vec<&str>) -> Vec<&str> {
    let mut seen = HashSet::new();
    tags.into_iter().filter(|tag| seen.insert(*tag)).collect()
}
