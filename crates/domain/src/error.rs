//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RollcallError`]
//! via `#[from]` (or an explicit `From` impl for boxed storage errors).

/// Base error type shared by the domain and application layers.
#[derive(Debug, thiserror::Error)]
pub enum RollcallError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated by caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` or `labels` was missing or empty.
    #[error("Field 'name' and 'labels' are required.")]
    MissingRequiredField { field: &'static str },
}

/// No stored record matched the requested identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_via_from() {
        let err: RollcallError = ValidationError::MissingRequiredField { field: "name" }.into();
        assert!(matches!(err, RollcallError::Validation(_)));
    }

    #[test]
    fn should_describe_missing_record() {
        let err = NotFoundError {
            entity: "Attendance",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Attendance 42 not found");
    }

    #[test]
    fn should_include_source_message_for_storage_errors() {
        let source = std::io::Error::other("disk on fire");
        let err = RollcallError::Storage(Box::new(source));
        assert_eq!(err.to_string(), "storage error: disk on fire");
    }
}
