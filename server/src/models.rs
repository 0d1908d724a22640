use chrono::{DateTime, Utc};
use diesel::prelude::*;
use recipe_board_core::RecipeDraft;

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub minutes: i32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub title: &'a str,
    pub minutes: i32,
    pub description: Option<&'a str>,
}

impl<'a> From<&'a RecipeDraft> for NewRecipe<'a> {
    fn from(draft: &'a RecipeDraft) -> Self {
        Self {
            title: draft.title(),
            minutes: draft.minutes(),
            description: draft.description(),
        }
    }
}

/// Overwrites every editable column; a `None` description writes NULL.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(treat_none_as_null = true)]
pub struct RecipeChangeset<'a> {
    pub title: &'a str,
    pub minutes: i32,
    pub description: Option<&'a str>,
}

impl<'a> From<&'a RecipeDraft> for RecipeChangeset<'a> {
    fn from(draft: &'a RecipeDraft) -> Self {
        Self {
            title: draft.title(),
            minutes: draft.minutes(),
            description: draft.description(),
        }
    }
}
