use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Field(#[from] FieldError),
}

impl DomainError {
    /// True for failures that happen while obtaining the document, as opposed
    /// to reading a field out of one.
    pub fn is_fetch_failure(&self) -> bool {
        !matches!(self, DomainError::Field(_))
    }
}

/// A recognized field is absent from the document or has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Missing field: {field}")]
    Missing { field: &'static str },

    #[error("Field {field} is not {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Field {field} has no index {index} (length {len})")]
    OutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },
}

impl FieldError {
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Missing { field }
            | FieldError::TypeMismatch { field, .. }
            | FieldError::OutOfRange { field, .. } => field,
        }
    }
}

impl From<&str> for DomainError {
    fn from(s: &str) -> Self {
        DomainError::InvalidInput(s.to_string())
    }
}
