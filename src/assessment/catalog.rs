//! Curriculum module catalog
//!
//! Descriptions for the modules a learning path can reference. Paths refer to
//! modules by name only; the catalog supplies objectives and durations for display.

use serde::Serialize;

use super::rules::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: &'static str,
    pub lesson: &'static str,
    pub objective: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

const WORKSHOP_OBJECTIVE: &str =
    "Master specialized speaking skills through intensive workshops";

const WORKSHOP_LESSON: &str = "lesson-5";

/// Lesson-5 workshops run as one shared block; the block is counted once
pub const WORKSHOP_BLOCK_MINUTES: u32 = 90;

pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: VOICE_FOUNDATION_WORKSHOP,
        lesson: "lesson-1",
        objective: "Master the fundamentals of voice projection, breathing techniques, and vocal warm-ups",
        duration_minutes: Some(45),
    },
    CatalogEntry {
        name: EXTENDED_VOICE_EXERCISES,
        lesson: "practice",
        objective: "Daily breathing, warm-up and projection drills to build vocal fitness",
        duration_minutes: None,
    },
    CatalogEntry {
        name: PRESENTATION_DESIGN_MASTERY,
        lesson: "lesson-2",
        objective: "Learn to create compelling presentations that engage and support your voice",
        duration_minutes: Some(50),
    },
    CatalogEntry {
        name: AUDIENCE_ENGAGEMENT_TECHNIQUES,
        lesson: "lesson-3",
        objective: "Develop skills to connect with your audience and handle various presentation scenarios",
        duration_minutes: Some(55),
    },
    CatalogEntry {
        name: CONFIDENCE_BUILDING_SYSTEMS,
        lesson: "lesson-4",
        objective: "Build unshakeable confidence through proven techniques and mindset strategies",
        duration_minutes: Some(60),
    },
    CatalogEntry {
        name: VOCAL_TECHNIQUE_MASTERY_WORKSHOP,
        lesson: WORKSHOP_LESSON,
        objective: WORKSHOP_OBJECTIVE,
        duration_minutes: None,
    },
    CatalogEntry {
        name: SLIDE_DESIGN_WORKSHOP,
        lesson: WORKSHOP_LESSON,
        objective: WORKSHOP_OBJECTIVE,
        duration_minutes: None,
    },
    CatalogEntry {
        name: QA_HANDLING_GUIDE,
        lesson: WORKSHOP_LESSON,
        objective: WORKSHOP_OBJECTIVE,
        duration_minutes: None,
    },
    CatalogEntry {
        name: STAGE_PRESENCE_TRAINING,
        lesson: WORKSHOP_LESSON,
        objective: WORKSHOP_OBJECTIVE,
        duration_minutes: None,
    },
];

pub fn lookup(module: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.name == module)
}

impl CatalogEntry {
    pub fn is_workshop(&self) -> bool {
        self.lesson == WORKSHOP_LESSON
    }
}

/// Whether any module on the path belongs to the shared workshop block
pub fn includes_workshop_block<S: AsRef<str>>(path: &[S]) -> bool {
    path.iter()
        .filter_map(|m| lookup(m.as_ref()))
        .any(CatalogEntry::is_workshop)
}

/// Sum of known module durations plus the workshop block when any workshop
/// is on the path; uncataloged modules add nothing
pub fn estimated_minutes<S: AsRef<str>>(path: &[S]) -> u32 {
    let lessons: u32 = path
        .iter()
        .filter_map(|m| lookup(m.as_ref()))
        .filter_map(|e| e.duration_minutes)
        .sum();

    if includes_workshop_block(path) {
        lessons + WORKSHOP_BLOCK_MINUTES
    } else {
        lessons
    }
}
