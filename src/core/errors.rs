use thiserror::Error;

#[derive(Error, Debug)]
pub enum KakitoriError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate item id in pool: {0}")]
    DuplicateItemId(String),

    #[error("item with empty id in pool")]
    MissingItemId,

    #[error("KakitoriError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for KakitoriError {
    fn from(error: std::io::Error) -> Self {
        KakitoriError::Io(Box::new(error))
    }
}
