use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("User with id {id} not found {location}")]
    NotFound { id: i64, location: ErrorLocation },
}

pub type Result<T> = std::result::Result<T, StoreError>;
