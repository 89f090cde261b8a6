//! Domain-specific errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("you cannot apply to your own listing")]
    OwnListing,
    #[error("{field} {problem}")]
    InvalidField {
        field: &'static str,
        problem: &'static str,
    },
}

impl DomainError {
    pub fn invalid(field: &'static str, problem: &'static str) -> Self {
        DomainError::InvalidField { field, problem }
    }
}
