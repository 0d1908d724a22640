use super::check_submission;
use super::index::render_index;
use crate::error::SubmitError;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use recipe_board_core::RecipeInput;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipeForm {
    /// `create` for the create form. Older forms omit it.
    #[serde(default, rename = "_action")]
    pub action: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub minutes: String,
    #[serde(default)]
    pub description: String,
}

impl From<CreateRecipeForm> for RecipeInput {
    fn from(form: CreateRecipeForm) -> Self {
        RecipeInput::new(form.title, form.minutes, form.description)
    }
}

pub async fn create_recipe(
    State(state): State<AppState>,
    Form(form): Form<CreateRecipeForm>,
) -> Response {
    if let Some(action) = form.action.as_deref().filter(|a| *a != "create") {
        tracing::debug!(action, "ignoring unknown form action");
        return Redirect::to("/").into_response();
    }

    let input = RecipeInput::from(form);

    let errors = match check_submission(&input, state.store()) {
        Ok((draft, store)) => match store.create(&draft) {
            Ok(recipe) => {
                tracing::info!(recipe_id = recipe.id, "created recipe");
                return Redirect::to("/").into_response();
            }
            Err(e) => {
                tracing::error!("Failed to create recipe: {}", e);
                vec![SubmitError::SaveFailed]
            }
        },
        Err(errors) => errors,
    };

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        render_index(&state, errors, input, None),
    )
        .into_response()
}
