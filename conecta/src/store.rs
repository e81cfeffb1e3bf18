//! ConectaStore - Main API for mobile interop
//!
//! Ties together the catalog, the filter engine, the session database and the
//! account API client behind one UniFFI-exported object.
//!
//! Concurrency Model:
//! - Session database uses an r2d2 connection pool (concurrent reads, no mutex blocking)
//! - The signed-in profile is cached behind a RwLock so screen reads skip the pool
//! - Account calls are async and run on the global fallback runtime when the
//!   caller (e.g. UniFFI) provides no tokio runtime of its own

use crate::api::ApiClient;
use crate::catalog::Catalog;
use crate::database::SessionDatabase;
use crate::filter;
use crate::interface::{
    CatalogEntry, CategorySummary, ConectaError, ConectaStoreApi, CourseTutorial, FilterCriteria,
    ProfileStats, ProfileUpdate, QuickTutorial, RegistrationForm, UserProfile,
};
use crate::models::StoredProfile;
use crate::tutorials;
use crate::validation;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

/// Global fallback Tokio runtime for when async functions are called outside any
/// runtime context. Shared across all ConectaStore instances and never dropped.
/// Used by UniFFI which doesn't provide a tokio runtime.
static FALLBACK_RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to create fallback tokio runtime")
});

/// Thread-safe ConectaIA core store
#[derive(uniffi::Object)]
pub struct ConectaStore {
    db: Arc<SessionDatabase>,
    api: Arc<ApiClient>,
    catalog: Catalog,
    profile_cache: RwLock<Option<StoredProfile>>,
}

// Internal implementation (not exported via FFI)
impl ConectaStore {
    /// Create a store with an in-memory database (for testing)
    #[cfg(test)]
    pub(crate) fn new_in_memory(api_base_url: &str) -> Result<Self, ConectaError> {
        let db = SessionDatabase::open_in_memory().map_err(ConectaError::from)?;
        let api = ApiClient::new(api_base_url).map_err(ConectaError::from)?;
        Ok(Self {
            db: Arc::new(db),
            api: Arc::new(api),
            catalog: Catalog::builtin(),
            profile_cache: RwLock::new(None),
        })
    }

    /// Get a tokio runtime handle - uses current runtime if available, otherwise global fallback
    fn runtime_handle(&self) -> tokio::runtime::Handle {
        tokio::runtime::Handle::try_current()
            .unwrap_or_else(|_| FALLBACK_RUNTIME.handle().clone())
    }

    /// Load the persisted session into the in-memory cache
    fn prime_profile_cache(&self) -> Result<(), ConectaError> {
        let profile = self.db.load_profile()?;
        *self.profile_cache.write() = profile;
        Ok(())
    }

    /// Persist a profile and refresh the cache
    fn store_profile(&self, profile: StoredProfile) -> Result<UserProfile, ConectaError> {
        self.db.save_profile(&profile)?;
        let result = profile.to_profile();
        *self.profile_cache.write() = Some(profile);
        Ok(result)
    }
}

// FFI-exported constructor (must be in standalone impl block)
#[uniffi::export]
impl ConectaStore {
    /// Create a new store with a database at the given path, talking to the
    /// given user API base URL (e.g. `http://host:4503/api/usuario`)
    #[uniffi::constructor]
    pub fn new(db_path: String, api_base_url: String) -> Result<Self, ConectaError> {
        let db = SessionDatabase::open(PathBuf::from(db_path)).map_err(ConectaError::from)?;
        let api = ApiClient::new(&api_base_url).map_err(ConectaError::from)?;

        let store = Self {
            db: Arc::new(db),
            api: Arc::new(api),
            catalog: Catalog::builtin(),
            profile_cache: RwLock::new(None),
        };
        store.prime_profile_cache()?;
        Ok(store)
    }
}

#[uniffi::export]
#[async_trait::async_trait]
impl ConectaStoreApi for ConectaStore {
    // ─────────────────────────────────────────────────────────────────────────────
    // Catalog
    // ─────────────────────────────────────────────────────────────────────────────

    fn search_catalog(&self, criteria: FilterCriteria) -> Vec<CatalogEntry> {
        filter::apply(self.catalog.entries(), &criteria)
    }

    fn featured(&self) -> Vec<CatalogEntry> {
        self.catalog.featured()
    }

    fn recently_added(&self, limit: u32) -> Vec<CatalogEntry> {
        self.catalog.recently_added(limit as usize)
    }

    fn category_summaries(&self) -> Vec<CategorySummary> {
        self.catalog.category_summaries()
    }

    fn entry_by_id(&self, entry_id: i64) -> Option<CatalogEntry> {
        self.catalog.entry_by_id(entry_id).cloned()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────────

    fn current_profile(&self) -> Result<Option<UserProfile>, ConectaError> {
        Ok(self.profile_cache.read().as_ref().map(StoredProfile::to_profile))
    }

    fn sign_out(&self) -> Result<(), ConectaError> {
        self.db.clear_profile()?;
        *self.profile_cache.write() = None;
        tracing::info!("signed out");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Account
    // ─────────────────────────────────────────────────────────────────────────────

    async fn sign_in(&self, email: String, password: String) -> Result<UserProfile, ConectaError> {
        if email.trim().is_empty() {
            return Err(ConectaError::Validation {
                field: "email".to_string(),
                message: "E-mail is required".to_string(),
            });
        }
        if password.is_empty() {
            return Err(ConectaError::Validation {
                field: "password".to_string(),
                message: "Password is required".to_string(),
            });
        }

        let api = Arc::clone(&self.api);
        let request_email = email.trim().to_string();
        let handle = self
            .runtime_handle()
            .spawn(async move { api.login(&request_email, &password).await });
        let remote = match handle.await {
            Ok(result) => result?,
            Err(_join_error) => {
                return Err(ConectaError::NetworkError("sign-in task failed".to_string()))
            }
        };

        tracing::info!(user_id = remote.id, "signed in");
        self.store_profile(StoredProfile::new(remote.id, remote.name, remote.email, remote.role))
    }

    async fn register(&self, form: RegistrationForm) -> Result<UserProfile, ConectaError> {
        validation::validate_registration(&form)?;

        let api = Arc::clone(&self.api);
        let name = form.name.trim().to_string();
        let email = form.email.trim().to_string();
        let password = form.password.clone();
        let handle = self
            .runtime_handle()
            .spawn(async move { api.create_user(&name, &email, &password).await });
        let remote = match handle.await {
            Ok(result) => result?,
            Err(_join_error) => {
                return Err(ConectaError::NetworkError("registration task failed".to_string()))
            }
        };

        tracing::info!(user_id = remote.id, "account created");
        // The user signs in afterwards; no session is persisted here
        Ok(StoredProfile::new(remote.id, remote.name, remote.email, remote.role).to_profile())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile, ConectaError> {
        let current = self
            .profile_cache
            .read()
            .clone()
            .ok_or(ConectaError::NotSignedIn)?;

        let name = match &update.name {
            Some(name) => {
                validation::validate_name(name)?;
                name.trim().to_string()
            }
            None => current.name.clone(),
        };
        if let Some(password) = &update.password {
            validation::validate_password(password)?;
        }

        let api = Arc::clone(&self.api);
        let user_id = current.user_id;
        let request_name = name.clone();
        let request_email = current.email.clone();
        let password = update.password.clone();
        let handle = self.runtime_handle().spawn(async move {
            api.update_user(user_id, &request_name, &request_email, password.as_deref())
                .await
        });
        let remote = match handle.await {
            Ok(result) => result?,
            Err(_join_error) => {
                return Err(ConectaError::NetworkError("profile update task failed".to_string()))
            }
        };

        tracing::info!(user_id = remote.id, "profile updated");
        let role = remote.role.or(current.role);
        self.store_profile(StoredProfile::new(remote.id, remote.name, remote.email, role))
    }

    async fn request_password_reset(&self, email: String) -> Result<(), ConectaError> {
        // The backend has no recovery endpoint yet; validate locally and
        // report success, matching the app's current behavior.
        validation::validate_email(&email)?;
        tracing::info!("password reset requested");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Tutorials
    // ─────────────────────────────────────────────────────────────────────────────

    fn quick_tutorials(&self) -> Vec<QuickTutorial> {
        tutorials::quick_tutorials()
    }

    fn course_tutorials(&self) -> Vec<CourseTutorial> {
        tutorials::course_tutorials()
    }

    fn set_tutorial_completed(&self, tutorial_id: i64, completed: bool) -> Result<(), ConectaError> {
        if !tutorials::is_known_tutorial(tutorial_id) {
            return Err(ConectaError::InvalidInput(format!(
                "unknown tutorial id {tutorial_id}"
            )));
        }
        self.db.set_tutorial_completed(tutorial_id, completed)?;
        Ok(())
    }

    fn completed_tutorial_ids(&self) -> Result<Vec<i64>, ConectaError> {
        Ok(self.db.completed_tutorial_ids()?)
    }

    fn profile_stats(&self) -> Result<ProfileStats, ConectaError> {
        Ok(ProfileStats {
            completed_tutorials: self.db.completed_count()? as u32,
        })
    }
}
