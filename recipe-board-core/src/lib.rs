//! Domain logic for the recipe board: raw form input, trimming and validation.
//!
//! Nothing in this crate performs I/O. The server crate feeds it the text a
//! browser submitted and persists whatever [`RecipeDraft`] comes back.

pub mod error;
pub mod types;
pub mod validate;

pub use error::FieldError;
pub use types::{RecipeDraft, RecipeInput};
pub use validate::{
    normalize_description, parse_minutes, trim_form_text, validate, MAX_TITLE_CHARS,
};
