use crate::store::{RecipeStore, StoreError};
use recipe_board_core::{validate, RecipeDraft, RecipeInput};

fn sample_recipes() -> Vec<RecipeDraft> {
    [
        RecipeInput::new("卵焼き", "10", "卵・砂糖・塩を混ぜて焼くシンプルな定番。"),
        RecipeInput::new("味噌汁", "15", "出汁を取り、味噌を溶き、豆腐とわかめを加える。"),
    ]
    .iter()
    .filter_map(|input| validate(input).ok())
    .collect()
}

/// Insert the sample recipes if the table has no rows. Returns how many were
/// inserted.
pub fn seed_if_empty(store: &dyn RecipeStore) -> Result<usize, StoreError> {
    let existing = store.count()?;
    if existing > 0 {
        tracing::info!(existing, "recipes already present, skipping seed");
        return Ok(0);
    }

    let samples = sample_recipes();
    for draft in &samples {
        store.create(draft)?;
    }

    Ok(samples.len())
}
