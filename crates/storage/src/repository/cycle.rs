use engine::models::Cycle;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::store::DocumentStore;

const COLLECTION: &str = "cycles";

pub struct CycleRepository<'a> {
    store: &'a dyn DocumentStore,
}

impl<'a> CycleRepository<'a> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self { store }
    }

    pub async fn save(&self, cycle: &Cycle) -> Result<()> {
        let doc = serde_json::to_value(cycle)?;
        self.store
            .put(COLLECTION, &cycle.cycle_id.to_string(), doc)
            .await?;
        tracing::debug!(cycle_id = %cycle.cycle_id, "Cycle saved");
        Ok(())
    }

    pub async fn get(&self, cycle_id: Uuid) -> Result<Cycle> {
        let doc = self
            .store
            .get(COLLECTION, &cycle_id.to_string())
            .await?
            .ok_or(StorageError::NotFound)?;
        Ok(serde_json::from_value(doc)?)
    }

    /// All cycles, newest first.
    pub async fn list(&self) -> Result<Vec<Cycle>> {
        let mut cycles: Vec<Cycle> = self
            .store
            .list(COLLECTION)
            .await?
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<_, _>>()?;

        cycles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(cycles)
    }

    pub async fn delete(&self, cycle_id: Uuid) -> Result<bool> {
        self.store.delete(COLLECTION, &cycle_id.to_string()).await
    }

    /// The active cycle, if any. No active cycle is a valid state, not an
    /// error.
    pub async fn find_active(&self) -> Result<Option<Cycle>> {
        let active: Vec<Cycle> = self
            .list()
            .await?
            .into_iter()
            .filter(|c| c.is_active)
            .collect();

        if active.len() > 1 {
            tracing::warn!(
                count = active.len(),
                "Multiple active cycles found; using the newest"
            );
        }

        Ok(active.into_iter().next())
    }

    /// Activates one cycle and deactivates every other. This is a
    /// read-modify-write over multiple documents with no transaction
    /// underneath, so the single-active invariant is best-effort
    /// (last writer wins) — acceptable for a single-user local store.
    pub async fn set_active(&self, cycle_id: Uuid) -> Result<Cycle> {
        let mut target = None;

        for mut cycle in self.list().await? {
            if cycle.cycle_id == cycle_id {
                cycle.is_active = true;
                self.save(&cycle).await?;
                target = Some(cycle);
            } else if cycle.is_active {
                cycle.is_active = false;
                self.save(&cycle).await?;
            }
        }

        target.ok_or(StorageError::NotFound)
    }
}
