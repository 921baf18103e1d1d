//! Content loading and lookup.
//!
//! Topics and quizzes live in two static JSON documents fetched once at
//! session start. The two loads are independent and order-free; both are
//! awaited before the first render. A missing or malformed document
//! degrades to an empty list; startup never aborts over content.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::warn;

use tema_core::model::{Quiz, Task, Topic, TopicId};

use crate::error::ContentError;

const TOPICS_DOCUMENT: &str = "topics.json";
const QUIZZES_DOCUMENT: &str = "quizzes.json";

/// Where the content documents come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentSource {
    /// A local directory containing the two documents.
    Dir(PathBuf),
    /// A base URL the document names are joined onto.
    BaseUrl(String),
}

impl ContentSource {
    /// Interprets a CLI/env value: http(s) prefixes become a base URL,
    /// anything else a local directory.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::BaseUrl(trimmed.trim_end_matches('/').to_string())
        } else {
            Self::Dir(PathBuf::from(trimmed))
        }
    }
}

/// The loaded, immutable content for one session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentLibrary {
    topics: Vec<Topic>,
    quizzes: Vec<Quiz>,
}

impl ContentLibrary {
    #[must_use]
    pub fn new(topics: Vec<Topic>, quizzes: Vec<Quiz>) -> Self {
        Self { topics, quizzes }
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Looks up a topic by its 1-based route position.
    #[must_use]
    pub fn topic_by_position(&self, position: usize) -> Option<&Topic> {
        position.checked_sub(1).and_then(|index| self.topics.get(index))
    }

    /// The quiz matching a topic, by string id equality.
    #[must_use]
    pub fn quiz_for(&self, topic_id: &TopicId) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.topic_id == *topic_id)
    }

    /// The task list for a topic, empty when no quiz matches.
    #[must_use]
    pub fn tasks_for(&self, topic_id: &TopicId) -> &[Task] {
        self.quiz_for(topic_id).map_or(&[], |quiz| &quiz.tasks)
    }
}

/// Fetches and decodes the content documents.
#[derive(Clone)]
pub struct ContentService {
    source: ContentSource,
    http: reqwest::Client,
}

impl ContentService {
    #[must_use]
    pub fn new(source: ContentSource) -> Self {
        Self {
            source,
            http: reqwest::Client::new(),
        }
    }

    /// Loads both documents and assembles the session library.
    ///
    /// The two fetches run independently; each failure degrades that
    /// document to an empty list.
    pub async fn load_library(&self) -> ContentLibrary {
        let (topics, quizzes) = tokio::join!(
            self.load_document::<Topic>(TOPICS_DOCUMENT),
            self.load_document::<Quiz>(QUIZZES_DOCUMENT),
        );
        ContentLibrary::new(topics, quizzes)
    }

    async fn load_document<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        match self.fetch_and_parse::<T>(name).await {
            Ok(items) => items,
            Err(err) => {
                warn!(document = name, error = %err, "content document unavailable, using empty list");
                Vec::new()
            }
        }
    }

    async fn fetch_and_parse<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>, ContentError> {
        let raw = match &self.source {
            ContentSource::Dir(dir) => tokio::fs::read_to_string(dir.join(name)).await?,
            ContentSource::BaseUrl(base) => {
                let response = self.http.get(format!("{base}/{name}")).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(ContentError::HttpStatus(status));
                }
                response.text().await?
            }
        };
        Ok(serde_json::from_str(&raw)?)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
