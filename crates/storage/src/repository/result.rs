use chrono::NaiveDate;
use engine::models::WorkoutResult;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::store::DocumentStore;

const COLLECTION: &str = "results";

pub struct ResultRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> ResultRepository<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn save(&self, result: &WorkoutResult) -> Result<()> {
        let doc = serde_json::to_value(result)?;
        self.store.put(COLLECTION, &result.result_id, doc).await?;
        tracing::debug!(
            result_id = %result.result_id,
            workout_id = %result.workout_id,
            "Workout result saved"
        );
        Ok(())
    }

    pub async fn get(&self, result_id: &str) -> Result<WorkoutResult> {
        let doc = self
            .store
            .get(COLLECTION, result_id)
            .await?
            .ok_or(StorageError::NotFound)?;
        Ok(serde_json::from_value(doc)?)
    }

    /// All results, oldest first.
    pub async fn list(&self) -> Result<Vec<WorkoutResult>> {
        let mut results: Vec<WorkoutResult> = self
            .store
            .list(COLLECTION)
            .await?
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<_, _>>()?;

        results.sort_by_key(|r| r.completed_at);
        Ok(results)
    }

    pub async fn list_by_plan(&self, plan_id: Uuid) -> Result<Vec<WorkoutResult>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|r| r.plan_id == plan_id)
            .collect())
    }

    pub async fn list_by_exercise(&self, exercise_id: &str) -> Result<Vec<WorkoutResult>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|r| r.exercise_id == exercise_id)
            .collect())
    }

    /// Results completed within `[from, to]`, inclusive on both ends.
    pub async fn list_by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<WorkoutResult>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|r| {
                let date = r.completed_at.date();
                date >= from && date <= to
            })
            .collect())
    }

    pub async fn delete(&self, result_id: &str) -> Result<bool> {
        self.store.delete(COLLECTION, result_id).await
    }
}
