use super::draft::DraftField;
use super::models::UserId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in the {field} field")]
    MissingField { field: DraftField },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("User id {0} is already taken")]
    DuplicateId(UserId),

    #[error("No user ids left after {0}")]
    IdsExhausted(UserId),
}
