use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("style identifier {0:?} has no category number")]
    MissingCategoryNumber(String),
    #[error("invalid {field} value {value:?}: expected a number")]
    InvalidStat { field: String, value: String },
    #[error("unknown statistic {0:?} (expected og, fg, ibu, srm or abv)")]
    UnknownStatistic(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
