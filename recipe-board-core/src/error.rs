use thiserror::Error;

/// A single user-correctable problem with submitted recipe fields.
///
/// The `Display` text is shown to the user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("title is required")]
    TitleRequired,

    #[error("title must be 200 characters or fewer")]
    TitleTooLong,

    #[error("minutes is required")]
    MinutesRequired,

    #[error("minutes must be an integer")]
    MinutesNotInteger,

    #[error("minutes must be ≥ 1")]
    MinutesTooSmall,

    #[error("minutes is too large")]
    MinutesTooLarge,
}
