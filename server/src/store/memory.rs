use super::{RecipeStore, StoreError};
use crate::models::Recipe;
use chrono::{DateTime, Utc};
use recipe_board_core::RecipeDraft;
use std::cmp::Reverse;
use std::sync::RwLock;

/// An in-process recipe table with the same ordering rules as Postgres.
///
/// Ids start at 1 and are never reused, like a `SERIAL` column.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Recipe>,
    last_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with an explicit creation time, for tests that need exact
    /// timestamp ties.
    pub fn insert_at(
        &self,
        draft: &RecipeDraft,
        created_at: DateTime<Utc>,
    ) -> Result<Recipe, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        inner.last_id += 1;
        let recipe = Recipe {
            id: inner.last_id,
            title: draft.title().to_string(),
            minutes: draft.minutes(),
            description: draft.description().map(str::to_string),
            created_at,
        };
        inner.rows.push(recipe.clone());

        Ok(recipe)
    }
}

impl RecipeStore for MemoryStore {
    fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;

        let mut rows = inner.rows.clone();
        rows.sort_by_key(|r| Reverse((r.created_at, r.id)));
        Ok(rows)
    }

    fn create(&self, draft: &RecipeDraft) -> Result<Recipe, StoreError> {
        self.insert_at(draft, Utc::now())
    }

    fn update(&self, id: i32, draft: &RecipeDraft) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        let Some(row) = inner.rows.iter_mut().find(|r| r.id == id) else {
            return Ok(false);
        };
        row.title = draft.title().to_string();
        row.minutes = draft.minutes();
        row.description = draft.description().map(str::to_string);
        Ok(true)
    }

    fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;

        let before = inner.rows.len();
        inner.rows.retain(|r| r.id != id);
        Ok(inner.rows.len() < before)
    }

    fn count(&self) -> Result<i64, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.rows.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use recipe_board_core::{validate, RecipeInput};

    fn draft(title: &str, minutes: &str, description: &str) -> RecipeDraft {
        validate(&RecipeInput::new(title, minutes, description)).unwrap()
    }

    #[test]
    fn test_list_orders_newest_first_then_by_id() {
        let store = MemoryStore::new();
        let early = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();

        let a = store.insert_at(&draft("a", "1", ""), late).unwrap();
        let b = store.insert_at(&draft("b", "1", ""), early).unwrap();
        let c = store.insert_at(&draft("c", "1", ""), late).unwrap();

        let ids: Vec<i32> = store.list().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![c.id, a.id, b.id]);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let store = MemoryStore::new();
        let first = store.create(&draft("a", "1", "")).unwrap();
        assert!(store.delete(first.id).unwrap());
        let second = store.create(&draft("b", "1", "")).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_update_keeps_identity() {
        let store = MemoryStore::new();
        let original = store.create(&draft("a", "1", "old")).unwrap();

        assert!(store.update(original.id, &draft("b", "2", "")).unwrap());

        let rows = store.list().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, original.id);
        assert_eq!(rows[0].created_at, original.created_at);
        assert_eq!(rows[0].title, "b");
        assert_eq!(rows[0].minutes, 2);
        assert_eq!(rows[0].description, None);
    }

    #[test]
    fn test_missing_ids() {
        let store = MemoryStore::new();
        store.create(&draft("a", "1", "")).unwrap();

        assert!(!store.update(99, &draft("b", "2", "")).unwrap());
        assert!(!store.delete(99).unwrap());
        assert_eq!(store.count().unwrap(), 1);
    }
}
