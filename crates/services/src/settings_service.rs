use std::sync::Arc;

use tema_core::model::UserSettings;
use storage::repository::{KvStore, keys};

use crate::error::SettingsServiceError;

/// Loads and persists the presentation settings (theme, text size,
/// high contrast) under their dedicated storage keys.
#[derive(Clone)]
pub struct SettingsService {
    kv: Arc<dyn KvStore>,
}

impl SettingsService {
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Load persisted settings; missing or unrecognized values fall back
    /// to the defaults (light theme, size 1.0, contrast off).
    ///
    /// # Errors
    ///
    /// Returns `SettingsServiceError` on storage failures.
    pub async fn load(&self) -> Result<UserSettings, SettingsServiceError> {
        let theme = self.kv.get(keys::THEME).await?;
        let text_size = self.kv.get(keys::TEXT_SIZE).await?;
        let high_contrast = self.kv.get(keys::HIGH_CONTRAST).await?;
        Ok(UserSettings::from_stored(
            theme.as_deref(),
            text_size.as_deref(),
            high_contrast.as_deref(),
        ))
    }

    /// Persist all three settings keys.
    ///
    /// # Errors
    ///
    /// Returns `SettingsServiceError` if any key cannot be stored.
    pub async fn save(&self, settings: UserSettings) -> Result<(), SettingsServiceError> {
        self.kv.set(keys::THEME, settings.theme.as_str()).await?;
        self.kv
            .set(keys::TEXT_SIZE, &settings.text_size.to_string())
            .await?;
        self.kv
            .set(
                keys::HIGH_CONTRAST,
                if settings.high_contrast { "true" } else { "false" },
            )
            .await?;
        Ok(())
    }
}
