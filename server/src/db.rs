use crate::config::Config;
use crate::store::{PgStore, RecipeStore, StoreError};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

/// Build a pool without connecting. Connections are opened (and pinged) on
/// checkout, so an unreachable database never blocks startup.
pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    r2d2::Pool::builder()
        .test_on_check_out(true)
        .connection_timeout(Duration::from_secs(5))
        .build_unchecked(manager)
}

/// Apply pending migrations, returning how many ran.
pub fn apply_migrations(conn: &mut PgConnection) -> Result<usize, StoreError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::Migration(e.to_string()))?;

    for version in &applied {
        tracing::info!(%version, "applied migration");
    }

    Ok(applied.len())
}

/// Runs migrations until one attempt succeeds, then never again.
///
/// A database that is down at startup gets migrated on the first checkout
/// after it comes back.
#[derive(Debug, Default)]
pub struct MigrationGate {
    done: AtomicBool,
    lock: Mutex<()>,
}

impl MigrationGate {
    /// Returns how many migrations `run` applied, or 0 once the gate is open.
    pub fn ensure(
        &self,
        run: impl FnOnce() -> Result<usize, StoreError>,
    ) -> Result<usize, StoreError> {
        if self.done.load(Ordering::Acquire) {
            return Ok(0);
        }

        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        if self.done.load(Ordering::Acquire) {
            return Ok(0);
        }

        let applied = run()?;
        self.done.store(true, Ordering::Release);
        Ok(applied)
    }
}

/// Open the configured store, or `None` when no database is configured.
///
/// A database that cannot be reached or migrated is logged and still
/// returned. Migrations are retried on the next checkout.
pub fn connect(config: &Config) -> Option<Arc<dyn RecipeStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, recipes cannot be saved");
        return None;
    };

    let store = PgStore::new(create_pool(database_url));
    if let Err(e) = store.migrate() {
        tracing::error!("Failed to prepare database, retrying on next request: {}", e);
    }

    Some(Arc::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_gate_retries_until_success() {
        let gate = MigrationGate::default();
        let attempts = Cell::new(0);

        let failing = gate.ensure(|| {
            attempts.set(attempts.get() + 1);
            Err(StoreError::Migration("connection refused".to_string()))
        });
        assert!(matches!(failing, Err(StoreError::Migration(_))));

        let applied = gate.ensure(|| {
            attempts.set(attempts.get() + 1);
            Ok(1)
        });
        assert_eq!(applied.unwrap(), 1);

        let again = gate.ensure(|| {
            attempts.set(attempts.get() + 1);
            Ok(1)
        });
        assert_eq!(again.unwrap(), 0);
        assert_eq!(attempts.get(), 2);
    }
}
