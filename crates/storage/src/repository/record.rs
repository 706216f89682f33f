use engine::models::OneRepMaxRecord;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::store::DocumentStore;

const COLLECTION: &str = "one_rep_max_records";

pub struct RecordRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> RecordRepository<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn save(&self, record: &OneRepMaxRecord) -> Result<()> {
        let doc = serde_json::to_value(record)?;
        self.store
            .put(COLLECTION, &record.record_id.to_string(), doc)
            .await?;
        tracing::debug!(
            record_id = %record.record_id,
            exercise_id = %record.exercise_id,
            "1RM record saved"
        );
        Ok(())
    }

    pub async fn get(&self, record_id: Uuid) -> Result<OneRepMaxRecord> {
        let doc = self
            .store
            .get(COLLECTION, &record_id.to_string())
            .await?
            .ok_or(StorageError::NotFound)?;
        Ok(serde_json::from_value(doc)?)
    }

    /// All records, newest first.
    pub async fn list(&self) -> Result<Vec<OneRepMaxRecord>> {
        let mut records: Vec<OneRepMaxRecord> = self
            .store
            .list(COLLECTION)
            .await?
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<_, _>>()?;

        records.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        Ok(records)
    }

    pub async fn list_by_exercise(&self, exercise_id: &str) -> Result<Vec<OneRepMaxRecord>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|r| r.exercise_id == exercise_id)
            .collect())
    }

    /// The best record on file for an exercise, by estimated max.
    pub async fn best_by_exercise(&self, exercise_id: &str) -> Result<Option<OneRepMaxRecord>> {
        Ok(self
            .list_by_exercise(exercise_id)
            .await?
            .into_iter()
            .max_by(|a, b| a.estimated_max.cmp(&b.estimated_max)))
    }

    pub async fn delete(&self, record_id: Uuid) -> Result<bool> {
        self.store
            .delete(COLLECTION, &record_id.to_string())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use engine::services::records::build_record;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_best_by_exercise() {
        let store = MemoryStore::new();
        let repo = RecordRepository::new(&store);

        let lighter = build_record("squat", "Squat", 5, Decimal::from(315), None, None).unwrap();
        let heavier = build_record("squat", "Squat", 3, Decimal::from(350), None, None).unwrap();
        repo.save(&lighter).await.unwrap();
        repo.save(&heavier).await.unwrap();

        let best = repo.best_by_exercise("squat").await.unwrap().unwrap();
        assert_eq!(best.record_id, heavier.record_id);

        assert!(repo.best_by_exercise("deadlift").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_is_explicit_and_final() {
        let store = MemoryStore::new();
        let repo = RecordRepository::new(&store);

        let record = build_record("squat", "Squat", 5, Decimal::from(315), None, None).unwrap();
        repo.save(&record).await.unwrap();

        assert!(repo.delete(record.record_id).await.unwrap());
        assert!(matches!(
            repo.get(record.record_id).await.unwrap_err(),
            StorageError::NotFound
        ));
    }
}
