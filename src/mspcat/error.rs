use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Service not found: {0}")]
    NotFound(String),

    #[error("Malformed catalog snapshot: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Export failed: {0}")]
    Encoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::Encoding(err.to_string())
    }
}

impl From<zip::result::ZipError> for CatalogError {
    fn from(err: zip::result::ZipError) -> Self {
        CatalogError::Encoding(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
