//! PACE assessment engine
//!
//! Maps questionnaire answers to a skill level, adaptive settings and an
//! ordered learning path. Synthesis and path generation are pure functions;
//! loading and rendering live alongside them.

pub mod catalog;
pub mod condition;
pub mod loader;
pub mod path;
pub mod questions;
pub mod renderer;
pub mod rules;
pub mod synthesize;
pub mod types;

pub use condition::{parse_condition, Condition, PathContext};
pub use loader::{load_rule_set, CliOverrides, RulesFile};
pub use path::generate_path;
pub use questions::{answers_from_pairs, validate_answers, AnswerIssue, QUESTIONS};
pub use renderer::{render_result, OutputFormat};
pub use rules::{PathRule, RuleSet};
pub use synthesize::{synthesize, synthesize_with};
pub use types::*;
