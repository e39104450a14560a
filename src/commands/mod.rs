//! CLI command implementations
//!
//! Each command is in its own submodule.

pub mod assess;
pub mod init;
pub mod questions;
pub mod rules;

pub use assess::{execute_assess, run_assessment, AssessOptions};
pub use init::{execute_init, InitOptions};
pub use questions::execute_questions;
pub use rules::{execute_rules, RulesOptions};
