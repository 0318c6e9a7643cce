use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The address is empty")]
    EmptyAddress,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Bounding box is invalid")]
    Bbox,
    #[error("The city has already been unlocked")]
    AlreadyUnlocked,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
