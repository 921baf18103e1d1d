use std::sync::Arc;

use tracing::warn;

use tema_core::model::{AttemptRecord, TopicId, UserProgress};
use storage::repository::{KvStore, keys};

use crate::error::ProgressServiceError;

/// Owns the persisted `userProgress` blob.
///
/// The blob is a single JSON object mapping topic id to attempt record.
/// Saves are read-modify-write: the stored blob is re-read, one topic's
/// record is replaced, and the whole blob is written back. The UI event
/// loop is the only writer, so last-write-wins is safe.
#[derive(Clone)]
pub struct ProgressService {
    kv: Arc<dyn KvStore>,
}

impl ProgressService {
    #[must_use]
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Loads all persisted progress.
    ///
    /// An unreadable or unparsable blob is treated as empty progress;
    /// this path never fails the caller.
    pub async fn load(&self) -> UserProgress {
        let raw = match self.kv.get(keys::USER_PROGRESS).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "could not read progress, starting empty");
                return UserProgress::new();
            }
        };
        let Some(raw) = raw else {
            return UserProgress::new();
        };
        match serde_json::from_str(&raw) {
            Ok(progress) => progress,
            Err(err) => {
                warn!(error = %err, "stored progress is malformed, starting empty");
                UserProgress::new()
            }
        }
    }

    /// The stored record for one topic, resized to the current task count.
    pub async fn record_for(&self, topic_id: &TopicId, task_count: usize) -> AttemptRecord {
        let mut record = self
            .load()
            .await
            .get(topic_id)
            .cloned()
            .unwrap_or_else(|| AttemptRecord::for_task_count(task_count));
        record.resize_for(task_count);
        record
    }

    /// Replaces one topic's record and writes the whole blob back.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if encoding or the store write fails.
    pub async fn save_topic(
        &self,
        topic_id: &TopicId,
        record: AttemptRecord,
    ) -> Result<(), ProgressServiceError> {
        let mut progress = self.load().await;
        progress.insert(topic_id, record);
        let encoded = serde_json::to_string(&progress)?;
        self.kv.set(keys::USER_PROGRESS, &encoded).await?;
        Ok(())
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use storage::repository::{InMemoryKvStore, StorageError};
    use tema_core::time::fixed_now;

    #[tokio::test]
    async fn save_then_load_round_trips_a_record() {
        let service = ProgressService::new(Arc::new(InMemoryKvStore::new()));
        let topic = TopicId::new("2");

        let mut record = AttemptRecord::for_task_count(3);
        record.record_success(0);
        record.record_failure(1);
        service.save_topic(&topic, record.clone()).await.unwrap();

        let loaded = service.load().await;
        assert_eq!(loaded.get(&topic), Some(&record));
    }

    #[tokio::test]
    async fn saving_one_topic_leaves_others_alone() {
        let service = ProgressService::new(Arc::new(InMemoryKvStore::new()));
        let first = TopicId::new("1");
        let second = TopicId::new("2");

        let mut done = AttemptRecord::for_task_count(1);
        done.record_success(0);
        done.refresh_completion(fixed_now());
        service.save_topic(&first, done.clone()).await.unwrap();
        service
            .save_topic(&second, AttemptRecord::for_task_count(2))
            .await
            .unwrap();

        let loaded = service.load().await;
        assert_eq!(loaded.get(&first), Some(&done));
        assert_eq!(loaded.completed_count(), 1);
    }

    #[tokio::test]
    async fn malformed_blob_loads_as_empty() {
        let kv = Arc::new(InMemoryKvStore::new());
        kv.set(keys::USER_PROGRESS, "{not json").await.unwrap();

        let service = ProgressService::new(kv);
        assert!(service.load().await.is_empty());
    }

    #[tokio::test]
    async fn record_for_resizes_stored_records() {
        let service = ProgressService::new(Arc::new(InMemoryKvStore::new()));
        let topic = TopicId::new("1");

        let mut record = AttemptRecord::for_task_count(2);
        record.record_success(0);
        service.save_topic(&topic, record).await.unwrap();

        // The quiz grew a task since the record was stored.
        let resized = service.record_for(&topic, 3).await;
        assert_eq!(resized.scores, vec![1, 0, 0]);
    }

    struct FailingKvStore;

    #[async_trait]
    impl KvStore for FailingKvStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Connection("down".into()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("down".into()))
        }

        async fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("down".into()))
        }
    }

    #[tokio::test]
    async fn storage_failure_on_load_yields_empty_progress() {
        let service = ProgressService::new(Arc::new(FailingKvStore));
        assert!(service.load().await.is_empty());
    }

    #[tokio::test]
    async fn storage_failure_on_save_is_an_error() {
        let service = ProgressService::new(Arc::new(FailingKvStore));
        let result = service
            .save_topic(&TopicId::new("1"), AttemptRecord::for_task_count(1))
            .await;
        assert!(result.is_err());
    }
}
