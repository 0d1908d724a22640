use recipe_board_core::FieldError;
use thiserror::Error;

/// Why a create or edit submission was not saved. Shown to the user verbatim.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] FieldError),

    #[error("cannot save: storage not configured (set DATABASE_URL)")]
    StorageNotConfigured,

    #[error("an error occurred while saving")]
    SaveFailed,
}
