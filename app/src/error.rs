use posts_core::{ApiError, PageError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Page(#[from] PageError),

    /// The page went away before it reported ready.
    #[error("page unloaded before content was ready")]
    PageUnloaded,
}
