//! Error types for the layout engine

pub type Result<T> = std::result::Result<T, LayoutError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A directive chain recursed past the defensive nesting bound
    #[error("directive nesting exceeded {limit} levels")]
    NestingTooDeep { limit: usize },

    /// Severity string did not name a known level
    #[error("invalid severity: '{0}'")]
    InvalidSeverity(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::NestingTooDeep { limit: 128 };
        assert_eq!(err.to_string(), "directive nesting exceeded 128 levels");

        let err = LayoutError::InvalidSeverity("loud".to_string());
        assert_eq!(err.to_string(), "invalid severity: 'loud'");
    }

    #[test]
    fn test_error_matching() {
        let err = LayoutError::NestingTooDeep { limit: 16 };
        assert!(matches!(err, LayoutError::NestingTooDeep { limit: 16 }));
    }
}
