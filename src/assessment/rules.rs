//! Path rules
//!
//! A rule set is data: a baseline module that opens every path, followed by
//! ordered `{ module, when }` rules. The built-in set encodes the speaking
//! curriculum's recommendations.

use serde::{Deserialize, Serialize};

use super::condition::Condition;
use super::questions::{fears, goals};
use super::types::SkillLevel;

pub const VOICE_FOUNDATION_WORKSHOP: &str = "Voice Foundation Workshop";
pub const EXTENDED_VOICE_EXERCISES: &str = "Extended Voice Exercises";
pub const PRESENTATION_DESIGN_MASTERY: &str = "Presentation Design Mastery";
pub const AUDIENCE_ENGAGEMENT_TECHNIQUES: &str = "Audience Engagement Techniques";
pub const CONFIDENCE_BUILDING_SYSTEMS: &str = "Confidence Building Systems";
pub const VOCAL_TECHNIQUE_MASTERY_WORKSHOP: &str = "Vocal Technique Mastery Workshop";
pub const SLIDE_DESIGN_WORKSHOP: &str = "Slide Design Workshop";
pub const QA_HANDLING_GUIDE: &str = "Q&A Handling Guide";
pub const STAGE_PRESENCE_TRAINING: &str = "Stage Presence Training";

/// One conditional recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRule {
    pub module: String,
    pub when: Condition,
}

impl PathRule {
    pub fn new(module: &str, when: Condition) -> Self {
        Self {
            module: module.to_string(),
            when,
        }
    }
}

/// Ordered rule set used by the path generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    /// Module emitted first on every path
    pub baseline: String,

    #[serde(default)]
    pub rules: Vec<PathRule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleSet {
    /// The speaking curriculum rules, in evaluation order
    pub fn builtin() -> Self {
        use Condition as C;

        Self {
            baseline: VOICE_FOUNDATION_WORKSHOP.to_string(),
            rules: vec![
                PathRule::new(
                    EXTENDED_VOICE_EXERCISES,
                    C::any(vec![
                        C::skill_is(SkillLevel::Beginner),
                        C::fear(fears::VOICE_QUALITY),
                    ]),
                ),
                PathRule::new(
                    PRESENTATION_DESIGN_MASTERY,
                    C::any(vec![
                        C::goal(goals::PRESENTATION_SKILLS),
                        C::goal(goals::PROFESSIONAL_GROWTH),
                    ]),
                ),
                PathRule::new(
                    AUDIENCE_ENGAGEMENT_TECHNIQUES,
                    C::any(vec![
                        C::fear(fears::LARGE_AUDIENCE),
                        C::goal(goals::AUDIENCE_ENGAGEMENT),
                    ]),
                ),
                PathRule::new(
                    CONFIDENCE_BUILDING_SYSTEMS,
                    C::any(vec![
                        C::fear(fears::BEING_JUDGED),
                        C::goal(goals::CONFIDENCE),
                    ]),
                ),
                PathRule::new(
                    VOCAL_TECHNIQUE_MASTERY_WORKSHOP,
                    C::any(vec![
                        C::skill_is(SkillLevel::Advanced),
                        C::goal(goals::VOICE_STRENGTH),
                    ]),
                ),
                PathRule::new(SLIDE_DESIGN_WORKSHOP, C::goal(goals::PRESENTATION_SKILLS)),
                PathRule::new(QA_HANDLING_GUIDE, C::fear(fears::QUESTIONS)),
                PathRule::new(
                    STAGE_PRESENCE_TRAINING,
                    C::any(vec![
                        C::fear(fears::LARGE_AUDIENCE),
                        C::goal(goals::PROFESSIONAL_GROWTH),
                    ]),
                ),
            ],
        }
    }

    /// Every module this rule set can emit, baseline first, without repeats
    pub fn modules(&self) -> Vec<&str> {
        let mut modules = vec![self.baseline.as_str()];
        for rule in &self.rules {
            if !modules.contains(&rule.module.as_str()) {
                modules.push(rule.module.as_str());
            }
        }
        modules
    }

    pub fn contains_module(&self, module: &str) -> bool {
        self.baseline == module || self.rules.iter().any(|r| r.module == module)
    }
}
