//! Persistence for recipes.
//!
//! Handlers only see [`RecipeStore`]; production uses [`PgStore`], tests use
//! [`MemoryStore`].

mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

use crate::models::Recipe;
use recipe_board_core::RecipeDraft;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection unavailable: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("migration failed: {0}")]
    Migration(String),

    #[error("store lock poisoned")]
    Poisoned,
}

/// A table of recipes.
///
/// Every method is a single unit of work: it either fully applies or leaves
/// the table untouched.
pub trait RecipeStore: Send + Sync + fmt::Debug {
    /// All recipes, newest `created_at` first, larger `id` first on ties.
    fn list(&self) -> Result<Vec<Recipe>, StoreError>;

    /// Insert a recipe. `id` and `created_at` are assigned by the store.
    fn create(&self, draft: &RecipeDraft) -> Result<Recipe, StoreError>;

    /// Overwrite title, minutes and description. Returns `false` when no
    /// recipe has this id.
    fn update(&self, id: i32, draft: &RecipeDraft) -> Result<bool, StoreError>;

    /// Remove a recipe. Returns `false` when it was already gone.
    fn delete(&self, id: i32) -> Result<bool, StoreError>;

    fn count(&self) -> Result<i64, StoreError>;
}
