use std::sync::Arc;

use quiz_core::model::{QuestionId, ReviewMarks};
use storage::repository::{KeyValueStore, StorageError};

/// Key under which the marked question ids are persisted.
pub const REVIEW_MARKS_KEY: &str = "review_marks";

/// Write-through access to the persisted "marked for review" set.
///
/// Keeps the last loaded set in memory so views can read it without I/O.
#[derive(Clone)]
pub struct ReviewMarkService {
    store: Arc<dyn KeyValueStore>,
    cached: ReviewMarks,
}

impl ReviewMarkService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            cached: ReviewMarks::new(),
        }
    }

    /// Last set seen by `refresh` or `toggle`.
    #[must_use]
    pub fn current(&self) -> &ReviewMarks {
        &self.cached
    }

    /// Re-read the persisted set and return a snapshot of it.
    ///
    /// An absent key or a value that is not a JSON id array reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store itself cannot be read.
    pub async fn refresh(&mut self) -> Result<ReviewMarks, StorageError> {
        self.cached = self.read().await?;
        Ok(self.cached.clone())
    }

    /// Flip `id` in the persisted set and write it back immediately.
    ///
    /// Returns `true` if the id is marked afterwards.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if reading or writing the store fails; the
    /// cached set is left unchanged in that case.
    pub async fn toggle(&mut self, id: QuestionId) -> Result<bool, StorageError> {
        let mut marks = self.read().await?;
        let marked = marks.toggle(id);
        let encoded = serde_json::to_string(&marks)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.store.set(REVIEW_MARKS_KEY, &encoded).await?;
        self.cached = marks;
        tracing::debug!(question = %id, marked, "review mark toggled");
        Ok(marked)
    }

    async fn read(&self) -> Result<ReviewMarks, StorageError> {
        let Some(raw) = self.store.get(REVIEW_MARKS_KEY).await? else {
            return Ok(ReviewMarks::new());
        };
        match serde_json::from_str::<ReviewMarks>(&raw) {
            Ok(marks) => Ok(marks),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable review marks");
                Ok(ReviewMarks::new())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryStore;

    fn service(store: &InMemoryStore) -> ReviewMarkService {
        ReviewMarkService::new(Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn absent_key_reads_empty() {
        let store = InMemoryStore::new();
        let mut marks = service(&store);
        assert!(marks.refresh().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_json_reads_empty() {
        let store = InMemoryStore::new();
        store.set(REVIEW_MARKS_KEY, "{not json").await.unwrap();
        let mut marks = service(&store);
        assert!(marks.refresh().await.unwrap().is_empty());

        // toggling over a corrupt value starts from an empty set
        assert!(marks.toggle(QuestionId::new(4)).await.unwrap());
        assert_eq!(
            store.get(REVIEW_MARKS_KEY).await.unwrap().as_deref(),
            Some("[4]")
        );
    }

    #[tokio::test]
    async fn toggle_writes_through() {
        let store = InMemoryStore::new();
        let mut marks = service(&store);

        assert!(marks.toggle(QuestionId::new(3)).await.unwrap());
        assert!(marks.toggle(QuestionId::new(1)).await.unwrap());
        assert_eq!(
            store.get(REVIEW_MARKS_KEY).await.unwrap().as_deref(),
            Some("[1,3]")
        );
        assert!(marks.current().contains(QuestionId::new(3)));

        assert!(!marks.toggle(QuestionId::new(3)).await.unwrap());
        assert_eq!(
            store.get(REVIEW_MARKS_KEY).await.unwrap().as_deref(),
            Some("[1]")
        );
    }

    #[tokio::test]
    async fn toggle_twice_restores_persisted_value() {
        let store = InMemoryStore::new();
        store.set(REVIEW_MARKS_KEY, "[2,5]").await.unwrap();
        let mut marks = service(&store);
        let before = marks.refresh().await.unwrap();

        marks.toggle(QuestionId::new(9)).await.unwrap();
        marks.toggle(QuestionId::new(9)).await.unwrap();

        assert_eq!(marks.refresh().await.unwrap(), before);
    }
}
