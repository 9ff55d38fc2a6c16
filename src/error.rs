use thiserror::Error;

use crate::database::DatabaseError;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Retrieval failed: {0}")]
    Retrieval(#[from] DatabaseError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StatsError {
    pub fn invalid(message: impl Into<String>) -> Self {
        StatsError::InvalidInput(message.into())
    }

    pub fn is_retrieval(&self) -> bool {
        matches!(self, StatsError::Retrieval(_))
    }
}

pub type StatsResult<T> = Result<T, StatsError>;
