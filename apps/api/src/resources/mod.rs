// Company resource library: interview PDFs grouped by company in object storage.

pub mod handlers;
pub mod library;
pub mod store;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Invalid company name '{0}'")]
    InvalidCompany(String),

    #[error("Invalid file name '{0}': expected a .pdf file")]
    InvalidFileName(String),

    #[error("Uploaded file is not a PDF")]
    NotPdf,

    #[error("Uploaded file exceeds the {max} byte limit")]
    TooLarge { max: usize },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
