use std::sync::Arc;

use tema_core::Clock;
use storage::repository::Storage;

use crate::content::{ContentLibrary, ContentService, ContentSource};
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::settings_service::SettingsService;

/// The fully wired service set handed to the UI.
///
/// Content is loaded here, before any view renders, so the rest of the app
/// can treat the library as immutable session state.
#[derive(Clone)]
pub struct AppServices {
    pub content: Arc<ContentLibrary>,
    pub settings: Arc<SettingsService>,
    pub progress: Arc<ProgressService>,
    pub clock: Clock,
}

impl AppServices {
    /// Bootstraps against a SQLite database and a content source.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened or
    /// migrated. Content failures never error here; they degrade to an
    /// empty library.
    pub async fn bootstrap(
        database_url: &str,
        source: ContentSource,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(database_url).await?;
        Ok(Self::with_storage(storage, ContentService::new(source), clock).await)
    }

    /// Wires services over an existing storage backend (tests use the
    /// in-memory store here).
    pub async fn with_storage(storage: Storage, content: ContentService, clock: Clock) -> Self {
        let library = content.load_library().await;
        Self::with_library(storage, library, clock)
    }

    /// Wires services around an already-assembled content library.
    #[must_use]
    pub fn with_library(storage: Storage, library: ContentLibrary, clock: Clock) -> Self {
        Self {
            content: Arc::new(library),
            settings: Arc::new(SettingsService::new(Arc::clone(&storage.kv))),
            progress: Arc::new(ProgressService::new(Arc::clone(&storage.kv))),
            clock,
        }
    }
}
