#![forbid(unsafe_code)]

//! # PACE - personalized learning paths
//!
//! Turns PACE assessment answers into a personalized speaking curriculum:
//! a skill level, adaptive session settings and an ordered list of modules.
//!
//! ## Example
//!
//! ```rust
//! use pace::{synthesize, AnswerSet, SkillLevel};
//!
//! let answers = AnswerSet::new()
//!     .with("experience", "advanced")
//!     .with("goals", vec!["voice_strength"]);
//!
//! let result = synthesize(&answers);
//! assert_eq!(result.skill_level, SkillLevel::Advanced);
//! assert_eq!(
//!     result.learning_path,
//!     vec!["Voice Foundation Workshop", "Vocal Technique Mastery Workshop"]
//! );
//! ```

pub mod assessment;
pub mod commands;
pub mod config;
pub mod error;

// Re-exports
pub use assessment::{
    generate_path, load_rule_set, render_result, synthesize, synthesize_with, validate_answers,
    AdaptiveSettings, Answer, AnswerIssue, AnswerSet, CliOverrides, Condition, OutputFormat,
    Pacing, PathRule, PersonalizationResult, PracticeFrequency, RuleSet, SkillLevel, SupportLevel,
};
pub use config::Config;
pub use error::{PaceError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
