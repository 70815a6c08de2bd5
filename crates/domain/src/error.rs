#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("storage quota exceeded")]
    QuotaExceeded,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
