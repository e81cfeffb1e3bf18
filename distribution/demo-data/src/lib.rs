//! Shared demo fixtures for the session seeding tool and tests.

/// The demo account used for screenshots and QA builds
pub struct DemoProfile {
    pub user_id: i64,
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
}

pub const DEMO_PROFILE: DemoProfile = DemoProfile {
    user_id: 1,
    name: "Ana Clara Souza",
    email: "ana.souza@conectaia.app",
    role: "AI Explorer",
};

/// A tutorial the demo account has finished
pub struct DemoCompletion {
    pub tutorial_id: i64,
    /// Relative offset in seconds from "now" (negative means in the past)
    pub offset: i64,
}

pub const DEMO_COMPLETIONS: &[DemoCompletion] = &[
    DemoCompletion {
        tutorial_id: 1,
        offset: -3 * 24 * 60 * 60, // 3 days ago
    },
    DemoCompletion {
        tutorial_id: 2,
        offset: -3600,
    },
];
