use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Status is required.")]
    MissingStatus,

    #[error("Note must be at least 5 characters long.")]
    NoteTooShort,
}

/// Coarse failure signal for repository calls. Callers only need
/// success/failure plus a message; the underlying cause is logged at the
/// transport layer and never distinguished here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Failed to fetch entries. Please try again later.")]
    Fetch,

    #[error("Failed to save entry. Please try again.")]
    Save,

    #[error("Failed to delete entry. Please try again.")]
    Delete,
}
