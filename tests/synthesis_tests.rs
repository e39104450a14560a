//! Assessment synthesis integration tests
//!
//! End-to-end behaviour of answer sets flowing through synthesis, custom
//! rule files and rendering.

use pace::assessment::rules::*;
use pace::{
    load_rule_set, render_result, synthesize, synthesize_with, AdaptiveSettings, AnswerSet,
    CliOverrides, OutputFormat, Pacing, PracticeFrequency, SkillLevel, SupportLevel,
};

const FEAR_OPTIONS: [&str; 4] = ["voice_quality", "large_audience", "being_judged", "questions"];
const GOAL_OPTIONS: [&str; 5] = [
    "confidence",
    "presentation_skills",
    "professional_growth",
    "audience_engagement",
    "voice_strength",
];

fn subsets<'a>(options: &[&'a str]) -> Vec<Vec<&'a str>> {
    (0..1u32 << options.len())
        .map(|mask| {
            options
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, o)| *o)
                .collect()
        })
        .collect()
}

// =============================================================================
// Learner scenarios
// =============================================================================

mod scenarios {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_answer_set_defaults() {
        let result = synthesize(&AnswerSet::new());

        assert_eq!(result.skill_level, SkillLevel::Beginner);
        assert_eq!(
            result.adaptive_settings,
            AdaptiveSettings {
                pacing: Pacing::Medium,
                support_level: SupportLevel::Medium,
                practice_frequency: PracticeFrequency::Moderate,
            }
        );
        assert_eq!(
            result.learning_path,
            vec![VOICE_FOUNDATION_WORKSHOP, EXTENDED_VOICE_EXERCISES]
        );
        assert!(result.preference_tags.is_empty());
        assert!(result.interest_tags.is_empty());
    }

    #[test]
    fn test_full_beginner_profile() {
        let answers = AnswerSet::new()
            .with("experience", "beginner")
            .with(
                "fears",
                vec!["voice_quality", "large_audience", "being_judged", "questions"],
            )
            .with("goals", vec!["confidence", "presentation_skills"])
            .with("learning_style", "hands_on")
            .with("pace_preference", "slow")
            .with("support_needed", "high")
            .with("practice_frequency", "daily");

        let result = synthesize(&answers);

        assert_eq!(result.skill_level, SkillLevel::Beginner);
        assert_eq!(
            result.adaptive_settings,
            AdaptiveSettings {
                pacing: Pacing::Slow,
                support_level: SupportLevel::High,
                practice_frequency: PracticeFrequency::Daily,
            }
        );
        assert_eq!(
            result.preference_tags,
            vec!["hands_on", "voice_quality", "large_audience", "being_judged", "questions"]
        );
        assert_eq!(result.interest_tags, vec!["confidence", "presentation_skills"]);
        assert_eq!(
            result.learning_path,
            vec![
                VOICE_FOUNDATION_WORKSHOP,
                EXTENDED_VOICE_EXERCISES,
                PRESENTATION_DESIGN_MASTERY,
                AUDIENCE_ENGAGEMENT_TECHNIQUES,
                CONFIDENCE_BUILDING_SYSTEMS,
                SLIDE_DESIGN_WORKSHOP,
                QA_HANDLING_GUIDE,
                STAGE_PRESENCE_TRAINING,
            ]
        );
    }

    #[test]
    fn test_advanced_without_fears() {
        let answers = AnswerSet::new()
            .with("experience", "advanced")
            .with("goals", vec!["voice_strength"]);

        let result = synthesize(&answers);
        assert_eq!(
            result.learning_path,
            vec![VOICE_FOUNDATION_WORKSHOP, VOCAL_TECHNIQUE_MASTERY_WORKSHOP]
        );
    }

    #[test]
    fn test_goals_only_keeps_beginner_default_cascade() {
        let answers = AnswerSet::new().with("goals", vec!["professional_growth"]);

        let result = synthesize(&answers);
        assert_eq!(result.skill_level, SkillLevel::Beginner);
        assert_eq!(
            result.learning_path,
            vec![
                VOICE_FOUNDATION_WORKSHOP,
                EXTENDED_VOICE_EXERCISES,
                PRESENTATION_DESIGN_MASTERY,
                STAGE_PRESENCE_TRAINING,
            ]
        );
    }

    #[test]
    fn test_answers_from_json() {
        let answers: AnswerSet = serde_json::from_str(
            r#"{
                "experience": "intermediate",
                "fears": ["questions"],
                "goals": null,
                "learning_style": "visual",
                "unused_question": "ignored"
            }"#,
        )
        .unwrap();

        let result = synthesize(&answers);
        assert_eq!(result.skill_level, SkillLevel::Intermediate);
        assert_eq!(result.preference_tags, vec!["visual", "questions"]);
        assert_eq!(
            result.learning_path,
            vec![VOICE_FOUNDATION_WORKSHOP, QA_HANDLING_GUIDE]
        );
    }
}

// =============================================================================
// Invariants over every skill/fear combination and a spread of goals
// =============================================================================

mod invariants {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all_answer_sets() -> Vec<AnswerSet> {
        let goal_sets: Vec<Vec<&str>> = subsets(&GOAL_OPTIONS);
        let mut sets = Vec::new();
        for level in ["beginner", "intermediate", "advanced", ""] {
            for fears in subsets(&FEAR_OPTIONS) {
                for goals in goal_sets.iter().step_by(3) {
                    let mut answers = AnswerSet::new();
                    if !level.is_empty() {
                        answers.record("experience", level);
                    }
                    if !fears.is_empty() {
                        answers.record("fears", fears.clone());
                    }
                    if !goals.is_empty() {
                        answers.record("goals", goals.clone());
                    }
                    sets.push(answers);
                }
            }
        }
        sets
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        for answers in all_answer_sets() {
            assert_eq!(synthesize(&answers), synthesize(&answers));
        }
    }

    #[test]
    fn test_baseline_first_and_no_duplicates() {
        for answers in all_answer_sets() {
            let path = synthesize(&answers).learning_path;
            assert_eq!(path[0], VOICE_FOUNDATION_WORKSHOP);

            let mut sorted = path.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), path.len(), "duplicate module in {:?}", path);
        }
    }

    #[test]
    fn test_qa_guide_tracks_questions_fear() {
        for answers in all_answer_sets() {
            let fears_questions = answers.multi("fears").contains(&"questions");
            let path = synthesize(&answers).learning_path;
            assert_eq!(
                path.iter().any(|m| m == QA_HANDLING_GUIDE),
                fears_questions
            );
        }
    }

    #[test]
    fn test_path_follows_rule_order() {
        let builtin = RuleSet::builtin();
        let order = builtin.modules();
        for answers in all_answer_sets() {
            let path = synthesize(&answers).learning_path;
            let positions: Vec<usize> = path
                .iter()
                .map(|m| order.iter().position(|o| *o == m.as_str()).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

// =============================================================================
// Custom rule files and rendering
// =============================================================================

mod customization {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_project_rules_change_the_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rules.json");
        std::fs::write(
            &path,
            r#"{
                "baseline": "Welcome Session",
                "rules": [
                    { "module": "Extended Voice Exercises", "when": "fears contains voice_quality" }
                ],
                "additionalRules": [
                    { "module": "Mentor Check-in", "when": "skillLevel == beginner && (fears contains being_judged || goals contains confidence)" }
                ]
            }"#,
        )
        .unwrap();

        let rules = load_rule_set(Some(&path), &CliOverrides::default()).unwrap();

        let nervous = AnswerSet::new().with("fears", vec!["being_judged"]);
        assert_eq!(
            synthesize_with(&nervous, &rules).learning_path,
            vec![
                "Welcome Session",
                CONFIDENCE_BUILDING_SYSTEMS,
                "Mentor Check-in",
            ]
        );

        let seasoned = AnswerSet::new()
            .with("experience", "advanced")
            .with("fears", vec!["voice_quality"]);
        assert_eq!(
            synthesize_with(&seasoned, &rules).learning_path,
            vec![
                "Welcome Session",
                EXTENDED_VOICE_EXERCISES,
                VOCAL_TECHNIQUE_MASTERY_WORKSHOP,
            ]
        );
    }

    #[test]
    fn test_markdown_render_of_full_profile() {
        let answers = AnswerSet::new()
            .with("experience", "intermediate")
            .with("goals", vec!["confidence", "audience_engagement"]);
        let result = synthesize(&answers);
        let out = render_result(&result, OutputFormat::Markdown).unwrap();

        assert!(out.contains("**Interests:** confidence, audience_engagement"));
        assert!(out.contains("2. **Audience Engagement Techniques** (55 min)"));
        assert!(out.contains("3. **Confidence Building Systems** (60 min)"));
        assert!(out.ends_with("Estimated core lesson time: 160 min"));
    }
}
