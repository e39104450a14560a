//! PACE questionnaire catalog
//!
//! The question ids the synthesizer reads, their selection kind and known
//! options, plus boundary validation of incoming answer sets.

use serde::Serialize;
use std::fmt;

use super::types::{Answer, AnswerSet};
use crate::error::{PaceError, Result};

pub const EXPERIENCE: &str = "experience";
pub const FEARS: &str = "fears";
pub const GOALS: &str = "goals";
pub const LEARNING_STYLE: &str = "learning_style";
pub const PACE_PREFERENCE: &str = "pace_preference";
pub const SUPPORT_NEEDED: &str = "support_needed";
pub const PRACTICE_FREQUENCY: &str = "practice_frequency";

/// Fear/concern option ids
pub mod fears {
    pub const VOICE_QUALITY: &str = "voice_quality";
    pub const LARGE_AUDIENCE: &str = "large_audience";
    pub const BEING_JUDGED: &str = "being_judged";
    pub const QUESTIONS: &str = "questions";
}

/// Goal option ids
pub mod goals {
    pub const CONFIDENCE: &str = "confidence";
    pub const PRESENTATION_SKILLS: &str = "presentation_skills";
    pub const PROFESSIONAL_GROWTH: &str = "professional_growth";
    pub const AUDIENCE_ENGAGEMENT: &str = "audience_engagement";
    pub const VOICE_STRENGTH: &str = "voice_strength";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Single,
    Multi,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn has_option(&self, id: &str) -> bool {
        self.options.iter().any(|o| o.id == id)
    }
}

const fn opt(id: &'static str, label: &'static str) -> QuestionOption {
    QuestionOption { id, label }
}

/// Questions in the order the assessment presents them
pub const QUESTIONS: &[Question] = &[
    Question {
        id: EXPERIENCE,
        prompt: "How much public speaking experience do you have?",
        kind: QuestionKind::Single,
        options: &[
            opt("beginner", "Little or none"),
            opt("intermediate", "I present occasionally"),
            opt("advanced", "I speak regularly"),
        ],
    },
    Question {
        id: FEARS,
        prompt: "What worries you most about speaking?",
        kind: QuestionKind::Multi,
        options: &[
            opt(fears::VOICE_QUALITY, "How my voice sounds"),
            opt(fears::LARGE_AUDIENCE, "Large audiences"),
            opt(fears::BEING_JUDGED, "Being judged"),
            opt(fears::QUESTIONS, "Handling questions"),
        ],
    },
    Question {
        id: GOALS,
        prompt: "What do you want to get out of this program?",
        kind: QuestionKind::Multi,
        options: &[
            opt(goals::CONFIDENCE, "Feel more confident"),
            opt(goals::PRESENTATION_SKILLS, "Build better presentations"),
            opt(goals::PROFESSIONAL_GROWTH, "Grow professionally"),
            opt(goals::AUDIENCE_ENGAGEMENT, "Engage my audience"),
            opt(goals::VOICE_STRENGTH, "Strengthen my voice"),
        ],
    },
    Question {
        id: LEARNING_STYLE,
        prompt: "How do you learn best?",
        kind: QuestionKind::Single,
        options: &[
            opt("hands_on", "Hands-on practice"),
            opt("visual", "Seeing examples"),
            opt("auditory", "Listening and discussion"),
            opt("reading", "Reading and reflection"),
        ],
    },
    Question {
        id: PACE_PREFERENCE,
        prompt: "What pace suits you?",
        kind: QuestionKind::Single,
        options: &[
            opt("slow", "Slow and thorough"),
            opt("medium", "Steady"),
            opt("fast", "Fast"),
        ],
    },
    Question {
        id: SUPPORT_NEEDED,
        prompt: "How much guidance would you like?",
        kind: QuestionKind::Single,
        options: &[
            opt("high", "Lots of guidance"),
            opt("medium", "Some guidance"),
            opt("low", "Mostly independent"),
        ],
    },
    Question {
        id: PRACTICE_FREQUENCY,
        prompt: "How often can you practice?",
        kind: QuestionKind::Single,
        options: &[
            opt("daily", "Every day"),
            opt("frequent", "A few times a week"),
            opt("moderate", "About once a week"),
        ],
    },
];

pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// A problem found while validating an answer set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerIssue {
    UnknownQuestion(String),
    UnknownOption { question: String, option: String },
    ExpectedSingle(String),
    ExpectedMulti(String),
}

impl fmt::Display for AnswerIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerIssue::UnknownQuestion(q) => write!(f, "unknown question '{}'", q),
            AnswerIssue::UnknownOption { question, option } => {
                write!(f, "unknown option '{}' for '{}'", option, question)
            }
            AnswerIssue::ExpectedSingle(q) => write!(f, "'{}' takes a single value", q),
            AnswerIssue::ExpectedMulti(q) => write!(f, "'{}' takes a list of values", q),
        }
    }
}

/// Check an answer set against the catalog
///
/// Issues are reported, not fixed: synthesis tolerates all of them.
/// Results are sorted by question id for stable output.
pub fn validate_answers(answers: &AnswerSet) -> Vec<AnswerIssue> {
    let mut entries: Vec<_> = answers.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut issues = Vec::new();
    for (id, answer) in entries {
        let Some(question) = find_question(id) else {
            issues.push(AnswerIssue::UnknownQuestion(id.clone()));
            continue;
        };

        match (question.kind, answer) {
            (QuestionKind::Single, Answer::Multi(_)) => {
                issues.push(AnswerIssue::ExpectedSingle(id.clone()))
            }
            (QuestionKind::Multi, Answer::Single(_)) => {
                issues.push(AnswerIssue::ExpectedMulti(id.clone()))
            }
            _ => {}
        }

        for option in answer.as_multi() {
            if !question.has_option(option) {
                issues.push(AnswerIssue::UnknownOption {
                    question: id.clone(),
                    option: option.to_string(),
                });
            }
        }
    }
    issues
}

/// Build an answer set from `question=value` pairs
///
/// Values for multi-select questions are split on commas; unknown questions
/// are kept as single values so validation can report them.
pub fn answers_from_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<AnswerSet> {
    let mut answers = AnswerSet::new();
    for pair in pairs {
        let pair = pair.as_ref();
        let (question, value) = pair
            .split_once('=')
            .map(|(q, v)| (q.trim(), v.trim()))
            .filter(|(q, _)| !q.is_empty())
            .ok_or_else(|| PaceError::InvalidAnswer {
                input: pair.to_string(),
            })?;

        let kind = find_question(question).map(|q| q.kind);
        let answer = match kind {
            Some(QuestionKind::Multi) => Answer::Multi(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => Answer::Single(value.to_string()),
        };
        answers.record(question, answer);
    }
    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_kinds() {
        assert_eq!(find_question(FEARS).unwrap().kind, QuestionKind::Multi);
        assert_eq!(find_question(GOALS).unwrap().kind, QuestionKind::Multi);
        assert_eq!(find_question(EXPERIENCE).unwrap().kind, QuestionKind::Single);
        assert!(find_question("favorite_color").is_none());
        assert_eq!(QUESTIONS.len(), 7);
    }

    #[test]
    fn test_validate_clean_answers() {
        let answers = AnswerSet::new()
            .with(EXPERIENCE, "advanced")
            .with(FEARS, vec!["questions"])
            .with(PACE_PREFERENCE, "fast");
        assert!(validate_answers(&answers).is_empty());
    }

    #[test]
    fn test_validate_reports_issues() {
        let answers = AnswerSet::new()
            .with("favorite_color", "blue")
            .with(FEARS, "questions")
            .with(EXPERIENCE, vec!["beginner"])
            .with(GOALS, vec!["fame"]);

        let issues = validate_answers(&answers);
        assert_eq!(
            issues,
            vec![
                AnswerIssue::ExpectedSingle(EXPERIENCE.to_string()),
                AnswerIssue::UnknownQuestion("favorite_color".to_string()),
                AnswerIssue::ExpectedMulti(FEARS.to_string()),
                AnswerIssue::UnknownOption {
                    question: GOALS.to_string(),
                    option: "fame".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_answers_from_pairs() {
        let answers = answers_from_pairs(&[
            "experience=advanced",
            "goals=confidence, voice_strength",
            "fears=",
        ])
        .unwrap();

        assert_eq!(answers.single(EXPERIENCE), Some("advanced"));
        assert_eq!(answers.multi(GOALS), vec!["confidence", "voice_strength"]);
        assert_eq!(answers.get(FEARS), Some(&Answer::Multi(vec![])));
    }

    #[test]
    fn test_answers_from_pairs_rejects_malformed() {
        assert!(answers_from_pairs(&["experience"]).is_err());
        assert!(answers_from_pairs(&["=beginner"]).is_err());
    }
}
