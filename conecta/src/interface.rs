//! ConectaIA FFI Interface Definition
//!
//! This file defines the public interface exposed to the mobile UI via UniFFI.
//! It acts as the source of truth for shared types.

use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Catalog category, the fixed vocabulary behind the discovery filter chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum Category {
    Text,
    Image,
    Code,
    Multimodal,
    Productivity,
    Video,
    Audio,
}

impl Category {
    /// Every category, in the order the home screen lists them
    pub const ALL: [Category; 7] = [
        Category::Text,
        Category::Image,
        Category::Code,
        Category::Multimodal,
        Category::Productivity,
        Category::Video,
        Category::Audio,
    ];

    /// Display label, also the value the filter chips send back
    pub fn label(&self) -> &'static str {
        match self {
            Category::Text => "Text",
            Category::Image => "Image",
            Category::Code => "Code",
            Category::Multimodal => "Multimodal",
            Category::Productivity => "Productivity",
            Category::Video => "Video",
            Category::Audio => "Audio",
        }
    }
}

/// Access/pricing tag attached to a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum AccessTag {
    Free,
    Premium,
    Pro,
    Advanced,
    Beta,
    Paid,
}

impl AccessTag {
    pub fn label(&self) -> &'static str {
        match self {
            AccessTag::Free => "Free",
            AccessTag::Premium => "Premium",
            AccessTag::Pro => "Pro",
            AccessTag::Advanced => "Advanced",
            AccessTag::Beta => "Beta",
            AccessTag::Paid => "Paid",
        }
    }
}

/// Difficulty level of a course tutorial
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum TutorialLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl TutorialLevel {
    pub fn label(&self) -> &'static str {
        match self {
            TutorialLevel::Beginner => "Beginner",
            TutorialLevel::Intermediate => "Intermediate",
            TutorialLevel::Advanced => "Advanced",
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// One AI tool in the directory
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct CatalogEntry {
    pub id: i64,
    pub title: String,
    /// The organization behind the tool, shown under the title
    pub vendor: String,
    pub category: Category,
    pub tags: Vec<AccessTag>,
    pub description: String,
    /// Ordered list of headline use cases for the detail popup
    pub principal_uses: Vec<String>,
    /// Human-readable pricing summary for the detail popup
    pub pricing: String,
    pub url: String,
    /// Asset name the UI resolves to a bundled logo image
    pub logo: String,
    /// Whether the entry appears in the home screen carousel
    pub featured: bool,
    /// When the entry was added to the catalog (drives "recently added")
    pub added_unix: i64,
}

/// Discovery filter state as the UI produces it.
///
/// Category and price tier arrive as chip labels. Unknown labels simply match
/// nothing; the engine never fails. An all-empty criteria imposes no
/// restriction and yields the full catalog.
#[derive(Debug, Clone, Default, PartialEq, uniffi::Record)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: Option<String>,
    pub price_tier: Option<String>,
}

/// Category with its live entry count for the home screen grid
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct CategorySummary {
    pub category: Category,
    pub count: u32,
}

/// The signed-in user as the screens see it
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct UserProfile {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    /// Self-described role shown on the profile screen
    pub role: Option<String>,
    /// Avatar initials derived from the name
    pub initials: String,
}

/// Registration form as filled in on the sign-up screen
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Edit submitted by the profile screen. Fields left as None are unchanged.
/// A new password is only sent over the wire, never stored on device.
#[derive(Debug, Clone, Default, PartialEq, Eq, uniffi::Record)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Short step-by-step guide shown as an expandable card
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct QuickTutorial {
    pub id: i64,
    pub title: String,
    /// Icon name the UI resolves to a glyph
    pub icon: String,
    /// Accent color as a hex string
    pub color: String,
    pub steps: Vec<String>,
}

/// Long-form course tutorial
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct CourseTutorial {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    pub level: TutorialLevel,
    pub icon: String,
    pub color: String,
}

/// Aggregate numbers for the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct ProfileStats {
    pub completed_tutorials: u32,
}

/// Error type for ConectaIA core operations
#[derive(Debug, Error, uniffi::Error)]
pub enum ConectaError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Invalid e-mail or password")]
    InvalidCredentials,
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Validation failed for {field}: {message}")]
    Validation { field: String, message: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("No user is signed in")]
    NotSignedIn,
}

// ═══════════════════════════════════════════════════════════════════════════════
// SERVICE INTERFACE
// ═══════════════════════════════════════════════════════════════════════════════

/// The primary interface for accessing the ConectaIA core.
/// This matches the functionality exposed by the `ConectaStore` object.
#[uniffi::export(with_foreign)]
#[async_trait::async_trait]
pub trait ConectaStoreApi: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────────

    /// Filter the catalog. An inactive criteria returns the full catalog.
    fn search_catalog(&self, criteria: FilterCriteria) -> Vec<CatalogEntry>;

    /// Entries for the home screen carousel, in catalog order
    fn featured(&self) -> Vec<CatalogEntry>;

    /// Most recently added entries, newest first
    fn recently_added(&self, limit: u32) -> Vec<CatalogEntry>;

    /// Every category with its live entry count
    fn category_summaries(&self) -> Vec<CategorySummary>;

    /// Fetch a single entry for the detail popup
    fn entry_by_id(&self, entry_id: i64) -> Option<CatalogEntry>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────────

    /// The persisted signed-in user, if any
    fn current_profile(&self) -> Result<Option<UserProfile>, ConectaError>;

    /// Clear the persisted session
    fn sign_out(&self) -> Result<(), ConectaError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Account
    // ─────────────────────────────────────────────────────────────────────────────

    /// Authenticate against the backend and persist the session on success
    async fn sign_in(&self, email: String, password: String) -> Result<UserProfile, ConectaError>;

    /// Create an account. Does not sign in; the user logs in afterwards.
    async fn register(&self, form: RegistrationForm) -> Result<UserProfile, ConectaError>;

    /// Push a profile edit to the backend and persist the result
    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, ConectaError>;

    /// Request a password-reset code for the given e-mail
    async fn request_password_reset(&self, email: String) -> Result<(), ConectaError>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Tutorials
    // ─────────────────────────────────────────────────────────────────────────────

    fn quick_tutorials(&self) -> Vec<QuickTutorial>;

    fn course_tutorials(&self) -> Vec<CourseTutorial>;

    /// Mark or unmark a tutorial as completed
    fn set_tutorial_completed(&self, tutorial_id: i64, completed: bool) -> Result<(), ConectaError>;

    fn completed_tutorial_ids(&self) -> Result<Vec<i64>, ConectaError>;

    fn profile_stats(&self) -> Result<ProfileStats, ConectaError>;
}

impl From<crate::database::DatabaseError> for ConectaError {
    fn from(e: crate::database::DatabaseError) -> Self {
        ConectaError::DatabaseError(e.to_string())
    }
}

impl From<crate::api::ApiError> for ConectaError {
    fn from(e: crate::api::ApiError) -> Self {
        use crate::api::ApiError;
        match e {
            ApiError::InvalidCredentials => ConectaError::InvalidCredentials,
            ApiError::Rejected { status, body } => {
                if body.trim().is_empty() {
                    ConectaError::Rejected(format!("HTTP {status}"))
                } else {
                    ConectaError::Rejected(body)
                }
            }
            other => ConectaError::NetworkError(other.to_string()),
        }
    }
}
