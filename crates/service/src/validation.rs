//! Request validation as plain functions over the transfer types.

use crate::errors::ServiceError;

/// Shape checks run before a request reaches a service.
pub trait Validate {
    fn validate(&self) -> Result<(), ServiceError>;
}

pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(format!("{field} must not be blank")));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &str, value: i32) -> Result<(), ServiceError> {
    if value < 1 {
        return Err(ServiceError::validation(format!("{field} must be at least 1")));
    }
    Ok(())
}

pub(crate) fn require_at_most(field: &str, value: i32, max: i32) -> Result<(), ServiceError> {
    if value > max {
        return Err(ServiceError::validation(format!("{field} must be at most {max}")));
    }
    Ok(())
}
