use super::check_submission;
use super::index::render_index;
use crate::error::SubmitError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use recipe_board_core::RecipeInput;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecipeForm {
    #[serde(default)]
    pub edit_title: String,
    #[serde(default)]
    pub edit_minutes: String,
    #[serde(default)]
    pub edit_description: String,
}

impl From<UpdateRecipeForm> for RecipeInput {
    fn from(form: UpdateRecipeForm) -> Self {
        RecipeInput::new(form.edit_title, form.edit_minutes, form.edit_description)
    }
}

/// Overwrite a recipe's title, minutes and description. Unknown ids are a
/// no-op; invalid input is reported the same way as on create.
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<UpdateRecipeForm>,
) -> Response {
    let input = RecipeInput::from(form);

    let errors = match check_submission(&input, state.store()) {
        Ok((draft, store)) => match store.update(id, &draft) {
            Ok(true) => {
                tracing::info!(recipe_id = id, "updated recipe");
                return Redirect::to("/").into_response();
            }
            Ok(false) => {
                tracing::debug!(recipe_id = id, "no recipe to update");
                return Redirect::to("/").into_response();
            }
            Err(e) => {
                tracing::error!("Failed to update recipe {}: {}", id, e);
                vec![SubmitError::SaveFailed]
            }
        },
        Err(errors) => errors,
    };

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        render_index(&state, errors, RecipeInput::default(), Some((id, input))),
    )
        .into_response()
}
