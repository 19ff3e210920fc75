// ============================================================================
// Order Store Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(i64),

    #[error("Order number already exists: {0}")]
    DuplicateOrderNumber(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl OrderError {
    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            OrderError::NotFound(_) => "not_found",
            OrderError::DuplicateOrderNumber(_) => "conflict",
            OrderError::Storage(_) | OrderError::Unavailable(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(OrderError::NotFound(1).kind(), "not_found");
        assert_eq!(OrderError::DuplicateOrderNumber("A1".into()).kind(), "conflict");
        assert_eq!(OrderError::Unavailable("poisoned".into()).kind(), "error");
        assert_eq!(OrderError::Storage(sqlx::Error::RowNotFound).kind(), "error");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(OrderError::NotFound(5).to_string(), "Order not found: 5");
        assert_eq!(
            OrderError::DuplicateOrderNumber("A1".into()).to_string(),
            "Order number already exists: A1"
        );
    }
}
