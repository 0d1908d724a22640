use crate::error::SubmitError;
use crate::models::Recipe;
use crate::pages::IndexPage;
use crate::AppState;
use axum::extract::State;
use axum::response::Html;
use recipe_board_core::RecipeInput;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    render_index(&state, Vec::new(), RecipeInput::default(), None)
}

/// All recipes for display. A missing or failing store shows an empty list.
pub(crate) fn load_recipes(state: &AppState) -> Vec<Recipe> {
    let Some(store) = state.store() else {
        return Vec::new();
    };

    match store.list() {
        Ok(recipes) => recipes,
        Err(e) => {
            tracing::error!("Failed to list recipes: {}", e);
            Vec::new()
        }
    }
}

pub(crate) fn render_index(
    state: &AppState,
    errors: Vec<SubmitError>,
    form: RecipeInput,
    editing: Option<(i32, RecipeInput)>,
) -> Html<String> {
    let page = IndexPage {
        recipes: load_recipes(state),
        errors,
        form,
        editing,
        db_ready: state.store().is_some(),
        port: state.config.port,
        debug: state.config.debug,
    };

    Html(page.render())
}
