use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Redirect,
};

/// Delete a recipe. Always lands back on the list, whether or not the recipe
/// existed or the store could be reached.
pub async fn delete_recipe(State(state): State<AppState>, Path(id): Path<i32>) -> Redirect {
    let Some(store) = state.store() else {
        tracing::debug!(recipe_id = id, "no store configured, nothing to delete");
        return Redirect::to("/");
    };

    match store.delete(id) {
        Ok(true) => tracing::info!(recipe_id = id, "deleted recipe"),
        Ok(false) => tracing::debug!(recipe_id = id, "no recipe to delete"),
        Err(e) => tracing::error!("Failed to delete recipe {}: {}", id, e),
    }

    Redirect::to("/")
}
