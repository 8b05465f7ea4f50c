//! Error types for contract violations

use thiserror::Error;

/// A caller broke the contract of a constructor or operation.
///
/// These are reported straight back to the immediate caller and are never
/// turned into an [`Outcome`](crate::Outcome) failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("Required value missing: {parameter}")]
    AbsentValue { parameter: &'static str },

    #[error("Message must not be empty: {parameter}")]
    EmptyMessage { parameter: &'static str },

    #[error("Expected at most one element, found more than one")]
    MultipleElements,
}

/// Result type alias for operations that can violate a contract.
pub type ContractResult<T> = Result<T, ContractViolation>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_display() {
        let err = ContractViolation::AbsentValue { parameter: "value" };
        let msg = format!("{}", err);
        assert!(msg.contains("Required value missing"));
        assert!(msg.contains("value"));
    }

    #[test]
    fn test_empty_message_display() {
        let err = ContractViolation::EmptyMessage {
            parameter: "error_message",
        };
        let msg = format!("{}", err);
        assert!(msg.contains("must not be empty"));
        assert!(msg.contains("error_message"));
    }

    #[test]
    fn test_multiple_elements_display() {
        let err = ContractViolation::MultipleElements;
        assert_eq!(
            format!("{}", err),
            "Expected at most one element, found more than one"
        );
    }
}
