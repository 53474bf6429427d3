use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid filter {0:?}: expected CATEGORY=TAG")]
    InvalidFilter(String),
    #[error("unknown tag category {0:?}")]
    UnknownCategory(String),
    #[error("tag {tag:?} is not a value of category {category:?}")]
    UnknownTag { category: String, tag: String },
    #[error("invalid search query: {0}")]
    Query(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
