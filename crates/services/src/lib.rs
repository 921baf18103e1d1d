#![forbid(unsafe_code)]

pub mod app_services;
pub mod content;
pub mod error;
pub mod progress_service;
pub mod quiz_session;
pub mod settings_service;

pub use tema_core::Clock;

pub use app_services::AppServices;
pub use content::{ContentLibrary, ContentService, ContentSource};
pub use error::{AppServicesError, ContentError, ProgressServiceError, SettingsServiceError};
pub use progress_service::ProgressService;
pub use quiz_session::{CheckReport, QuizSession};
pub use settings_service::SettingsService;
