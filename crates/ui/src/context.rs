use std::sync::Arc;

use services::{ContentLibrary, ProgressService, SettingsService};
use tema_core::Clock;

/// What the UI needs from the application composition root.
pub trait UiApp: Send + Sync {
    fn content(&self) -> Arc<ContentLibrary>;
    fn settings(&self) -> Arc<SettingsService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn clock(&self) -> Clock;
}

/// Explicitly passed session context: loaded content plus the services every
/// view talks to. Nothing here is reachable through globals.
#[derive(Clone)]
pub struct AppContext {
    content: Arc<ContentLibrary>,
    settings: Arc<SettingsService>,
    progress: Arc<ProgressService>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            content: app.content(),
            settings: app.settings(),
            progress: app.progress(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn content(&self) -> Arc<ContentLibrary> {
        Arc::clone(&self.content)
    }

    #[must_use]
    pub fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
