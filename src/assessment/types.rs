//! Assessment types
//!
//! Answer sets coming in from a questionnaire and the personalization result
//! going out. JSON shapes match what the lesson UI stores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A single answer: one option for single-select questions, a list for multi-select
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multi(Vec<String>),
}

impl Answer {
    /// Read as a single-select value; a list yields its first element
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Answer::Single(value) => Some(value.as_str()),
            Answer::Multi(values) => values.first().map(String::as_str),
        }
    }

    /// Read as a multi-select value; a lone value is treated as a one-element list
    pub fn as_multi(&self) -> Vec<&str> {
        match self {
            Answer::Single(value) => vec![value.as_str()],
            Answer::Multi(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Single(value.to_string())
    }
}

impl From<Vec<&str>> for Answer {
    fn from(values: Vec<&str>) -> Self {
        Answer::Multi(values.into_iter().map(str::to_string).collect())
    }
}

/// Learner answers keyed by question id
///
/// `null` entries in JSON input are treated as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "HashMap<String, Option<Answer>>",
    into = "HashMap<String, Answer>"
)]
pub struct AnswerSet {
    answers: HashMap<String, Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the answer for one question
    pub fn record(&mut self, question: impl Into<String>, answer: impl Into<Answer>) {
        self.answers.insert(question.into(), answer.into());
    }

    /// Builder-style variant of [`AnswerSet::record`]
    pub fn with(mut self, question: impl Into<String>, answer: impl Into<Answer>) -> Self {
        self.record(question, answer);
        self
    }

    pub fn get(&self, question: &str) -> Option<&Answer> {
        self.answers.get(question)
    }

    /// Single-select lookup; missing questions yield `None`
    pub fn single(&self, question: &str) -> Option<&str> {
        self.get(question).and_then(Answer::as_single)
    }

    /// Multi-select lookup; missing questions yield an empty list
    pub fn multi(&self, question: &str) -> Vec<&str> {
        self.get(question).map(Answer::as_multi).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Answer)> {
        self.answers.iter()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Merge another answer set into this one; `other` wins on conflicts
    pub fn merge(&mut self, other: AnswerSet) {
        self.answers.extend(other.answers);
    }
}

impl From<HashMap<String, Option<Answer>>> for AnswerSet {
    fn from(raw: HashMap<String, Option<Answer>>) -> Self {
        Self {
            answers: raw
                .into_iter()
                .filter_map(|(question, answer)| answer.map(|a| (question, a)))
                .collect(),
        }
    }
}

impl From<AnswerSet> for HashMap<String, Answer> {
    fn from(set: AnswerSet) -> Self {
        set.answers
    }
}

/// Learner skill level derived from the experience question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "advanced" => Some(SkillLevel::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pacing {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl Pacing {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "slow" => Some(Pacing::Slow),
            "medium" => Some(Pacing::Medium),
            "fast" => Some(Pacing::Fast),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pacing::Slow => "slow",
            Pacing::Medium => "medium",
            Pacing::Fast => "fast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl SupportLevel {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "high" => Some(SupportLevel::High),
            "medium" => Some(SupportLevel::Medium),
            "low" => Some(SupportLevel::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SupportLevel::High => "high",
            SupportLevel::Medium => "medium",
            SupportLevel::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeFrequency {
    Daily,
    Frequent,
    #[default]
    Moderate,
}

impl PracticeFrequency {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "daily" => Some(PracticeFrequency::Daily),
            "frequent" => Some(PracticeFrequency::Frequent),
            "moderate" => Some(PracticeFrequency::Moderate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PracticeFrequency::Daily => "daily",
            PracticeFrequency::Frequent => "frequent",
            PracticeFrequency::Moderate => "moderate",
        }
    }
}

/// Session settings handed to lesson delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptiveSettings {
    pub pacing: Pacing,
    pub support_level: SupportLevel,
    pub practice_frequency: PracticeFrequency,
}

/// Everything derived from one assessment submission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationResult {
    pub skill_level: SkillLevel,
    pub preference_tags: Vec<String>,
    pub interest_tags: Vec<String>,
    pub adaptive_settings: AdaptiveSettings,
    pub learning_path: Vec<String>,
}
