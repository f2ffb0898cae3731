use thiserror::Error;

#[derive(Error, Debug)]
pub enum MultiSelectError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Duplicate option: {0}")]
    DuplicateOption(String),

    #[error("Option catalog is empty")]
    EmptyCatalog,

    #[error("Component is locked")]
    Locked,

    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("Component already registered: {0}")]
    AlreadyRegistered(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MultiSelectError>;
