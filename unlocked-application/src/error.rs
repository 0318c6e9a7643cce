use thiserror::Error;
use unlocked_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

pub use unlocked_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl AppError {
    /// The city has already been unlocked before.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::Business(BError::Parameter(ParameterError::AlreadyUnlocked))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_already_unlocked_cities_are_duplicates() {
        assert!(AppError::from(ParameterError::AlreadyUnlocked).is_duplicate());
        assert!(!AppError::from(ParameterError::EmptyAddress).is_duplicate());
        assert!(!AppError::from(RepoError::NotFound).is_duplicate());
        assert!(!AppError::from(anyhow::anyhow!("Connection refused")).is_duplicate());
    }

    #[test]
    fn keep_the_message_of_the_cause() {
        let err = AppError::from(ParameterError::EmptyAddress);
        assert_eq!("The address is empty", err.to_string());
        let err = AppError::from(ParameterError::Repo(RepoError::NotFound));
        assert_eq!("The requested object could not be found", err.to_string());
    }
}
