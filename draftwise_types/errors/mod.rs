use thiserror::Error;

pub mod app_error;
pub mod data_error;
pub mod draft_error;

pub use app_error::AppError;
pub use data_error::DataError;
pub use draft_error::DraftError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}
