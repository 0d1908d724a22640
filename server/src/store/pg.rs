use super::{RecipeStore, StoreError};
use crate::db::{self, DbPool, MigrationGate};
use crate::models::{NewRecipe, Recipe, RecipeChangeset};
use crate::schema::recipes;
use diesel::prelude::*;
use recipe_board_core::RecipeDraft;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use std::fmt;
use std::sync::Arc;

/// Recipes stored in Postgres through a pooled Diesel connection.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
    migrations: Arc<MigrationGate>,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            migrations: Arc::default(),
        }
    }

    /// Apply pending migrations now instead of on first use.
    pub fn migrate(&self) -> Result<usize, StoreError> {
        let mut conn = self.pool.get()?;
        self.migrations.ensure(|| db::apply_migrations(&mut conn))
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>, StoreError> {
        let mut conn = self.pool.get()?;
        self.migrations.ensure(|| db::apply_migrations(&mut conn))?;
        Ok(conn)
    }
}

impl fmt::Debug for PgStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.pool.state();
        f.debug_struct("PgStore")
            .field("connections", &state.connections)
            .field("idle_connections", &state.idle_connections)
            .finish()
    }
}

impl RecipeStore for PgStore {
    fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        let mut conn = self.conn()?;

        let rows = recipes::table
            .select(Recipe::as_select())
            .order((recipes::created_at.desc(), recipes::id.desc()))
            .load(&mut conn)?;

        Ok(rows)
    }

    fn create(&self, draft: &RecipeDraft) -> Result<Recipe, StoreError> {
        let mut conn = self.conn()?;

        let recipe = diesel::insert_into(recipes::table)
            .values(&NewRecipe::from(draft))
            .returning(Recipe::as_returning())
            .get_result(&mut conn)?;

        Ok(recipe)
    }

    fn update(&self, id: i32, draft: &RecipeDraft) -> Result<bool, StoreError> {
        let mut conn = self.conn()?;

        let updated = diesel::update(recipes::table.find(id))
            .set(&RecipeChangeset::from(draft))
            .execute(&mut conn)?;

        Ok(updated > 0)
    }

    fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(recipes::table.find(id)).execute(&mut conn)?;

        Ok(deleted > 0)
    }

    fn count(&self) -> Result<i64, StoreError> {
        let mut conn = self.conn()?;

        Ok(recipes::table.count().get_result(&mut conn)?)
    }
}
