//! Core data models for ConectaIA
//!
//! Internal representations used by the session database. FFI-facing types
//! live in `interface.rs`; conversions happen here.

use crate::interface::UserProfile;

/// Fallback initials when no usable name is present
const FALLBACK_INITIALS: &str = "IA";

/// Internal signed-in user representation for database storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredProfile {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
    pub saved_at_unix: i64,
}

impl StoredProfile {
    /// Create a profile stamped with the current time
    pub fn new(user_id: i64, name: String, email: String, role: Option<String>) -> Self {
        Self {
            user_id,
            name,
            email,
            role,
            saved_at_unix: chrono::Utc::now().timestamp(),
        }
    }

    /// Avatar initials for this profile
    pub fn initials(&self) -> String {
        initials_for(&self.name)
    }

    /// Convert to the FFI record the screens consume
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            user_id: self.user_id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            initials: self.initials(),
        }
    }
}

/// Avatar initials: first letter of the first and last name, upper-cased.
/// Single-word names yield one letter; blank names fall back to "IA".
pub fn initials_for(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => FALLBACK_INITIALS.to_string(),
        [only] => first_letter(only),
        [first, .., last] => format!("{}{}", first_letter(first), first_letter(last)),
    }
}

fn first_letter(word: &str) -> String {
    word.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}
