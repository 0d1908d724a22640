/// Recipe fields exactly as submitted, before trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeInput {
    pub title: String,
    pub minutes: String,
    pub description: String,
}

impl RecipeInput {
    pub fn new(
        title: impl Into<String>,
        minutes: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            minutes: minutes.into(),
            description: description.into(),
        }
    }
}

/// A validated recipe, ready to be written.
///
/// Built only by [`crate::validate`], so the title is trimmed and 1..=200
/// characters, `minutes >= 1`, and an empty description is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    title: String,
    minutes: i32,
    description: Option<String>,
}

impl RecipeDraft {
    pub(crate) fn new(title: String, minutes: i32, description: Option<String>) -> Self {
        Self {
            title,
            minutes,
            description,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn minutes(&self) -> i32 {
        self.minutes
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
