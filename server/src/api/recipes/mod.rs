pub mod create;
pub mod delete;
pub mod index;
pub mod list;
pub mod update;

use crate::error::SubmitError;
use crate::store::RecipeStore;
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use recipe_board_core::{validate, RecipeDraft, RecipeInput};
use utoipa::OpenApi;

/// Returns the router for the recipe page, its form targets and the JSON list
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index).post(create::create_recipe))
        .route("/edit/{id}", post(update::update_recipe))
        .route("/delete/{id}", post(delete::delete_recipe))
        .route("/api/recipes", get(list::list_recipes))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_recipes),
    components(schemas(list::ListRecipesResponse, list::RecipeResponse))
)]
pub struct ApiDoc;

/// Validate a submission and make sure there is somewhere to save it.
///
/// Field errors and the missing-storage error are reported together.
fn check_submission<'a>(
    input: &RecipeInput,
    store: Option<&'a dyn RecipeStore>,
) -> Result<(RecipeDraft, &'a dyn RecipeStore), Vec<SubmitError>> {
    let mut errors = Vec::new();

    let draft = match validate(input) {
        Ok(draft) => Some(draft),
        Err(field_errors) => {
            errors.extend(field_errors.into_iter().map(SubmitError::from));
            None
        }
    };

    if store.is_none() {
        errors.push(SubmitError::StorageNotConfigured);
    }

    match (draft, store) {
        (Some(draft), Some(store)) => Ok((draft, store)),
        _ => Err(errors),
    }
}
