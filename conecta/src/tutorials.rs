//! Tutorial content
//!
//! Static configuration for the tutorials screen: short step-by-step guides
//! plus long-form courses. Completion state lives in the session database;
//! this module only owns the content tables.

use crate::interface::{CourseTutorial, QuickTutorial, TutorialLevel};

pub struct RawQuickTutorial {
    pub id: i64,
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub steps: &'static [&'static str],
}

pub struct RawCourseTutorial {
    pub id: i64,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
    pub level: TutorialLevel,
    pub icon: &'static str,
    pub color: &'static str,
}

pub const QUICK_TUTORIALS: &[RawQuickTutorial] = &[
    RawQuickTutorial {
        id: 1,
        title: "Getting started with ChatGPT",
        icon: "chatbubble-ellipses-outline",
        color: "#10a37f",
        steps: &[
            "1. Go to chat.openai.com or install the app.",
            "2. Create an account with Google or e-mail.",
            "3. Turn on 'History' to keep your conversations.",
            "4. Tip: pin important chats to find them quickly.",
        ],
    },
    RawQuickTutorial {
        id: 2,
        title: "Art with Nano Banana",
        icon: "image-outline",
        color: "#F4B400",
        steps: &[
            "1. Open the Nano Banana tool.",
            "2. Type a prompt: 'Cyberpunk banana in neon'.",
            "3. Hit 'Generate' and wait.",
            "4. Pick the best result and download it.",
        ],
    },
    RawQuickTutorial {
        id: 3,
        title: "Exploring Gemini",
        icon: "sparkles-outline",
        color: "#4285F4",
        steps: &[
            "1. Go to gemini.google.com.",
            "2. Upload a photo and ask for details.",
            "3. Use '@' to bring in Docs and Gmail.",
            "4. Use the microphone for long conversations.",
        ],
    },
];

pub const COURSE_TUTORIALS: &[RawCourseTutorial] = &[
    RawCourseTutorial {
        id: 101,
        title: "Masterclass: Prompt Engineering",
        description: "Learn to speak the language of AI, from basics to advanced.",
        duration_minutes: 45,
        level: TutorialLevel::Intermediate,
        icon: "school-outline",
        color: "#E11D48",
    },
    RawCourseTutorial {
        id: 102,
        title: "AI at Work: Maximum Productivity",
        description: "Automate spreadsheets, e-mails and meetings with ClickUp Brain.",
        duration_minutes: 70,
        level: TutorialLevel::Beginner,
        icon: "briefcase-outline",
        color: "#2563EB",
    },
    RawCourseTutorial {
        id: 103,
        title: "Building an App with AI",
        description: "The definitive guide to integrating AI APIs into your product.",
        duration_minutes: 150,
        level: TutorialLevel::Advanced,
        icon: "code-slash-outline",
        color: "#7C3AED",
    },
];

pub fn quick_tutorials() -> Vec<QuickTutorial> {
    QUICK_TUTORIALS
        .iter()
        .map(|raw| QuickTutorial {
            id: raw.id,
            title: raw.title.to_string(),
            icon: raw.icon.to_string(),
            color: raw.color.to_string(),
            steps: raw.steps.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

pub fn course_tutorials() -> Vec<CourseTutorial> {
    COURSE_TUTORIALS
        .iter()
        .map(|raw| CourseTutorial {
            id: raw.id,
            title: raw.title.to_string(),
            description: raw.description.to_string(),
            duration_minutes: raw.duration_minutes,
            level: raw.level,
            icon: raw.icon.to_string(),
            color: raw.color.to_string(),
        })
        .collect()
}

/// Whether a tutorial id exists in either table
pub fn is_known_tutorial(id: i64) -> bool {
    QUICK_TUTORIALS.iter().any(|t| t.id == id) || COURSE_TUTORIALS.iter().any(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tutorial_ids_unique_across_tables() {
        let mut ids: Vec<i64> = QUICK_TUTORIALS
            .iter()
            .map(|t| t.id)
            .chain(COURSE_TUTORIALS.iter().map(|t| t.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_quick_tutorials_have_steps() {
        for tutorial in quick_tutorials() {
            assert!(!tutorial.steps.is_empty(), "{} has no steps", tutorial.title);
        }
    }

    #[test]
    fn test_known_tutorial_lookup() {
        assert!(is_known_tutorial(1));
        assert!(is_known_tutorial(103));
        assert!(!is_known_tutorial(999));
    }
}
