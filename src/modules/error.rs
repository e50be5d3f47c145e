use thiserror::Error;

/**
 * error.rs defines the failures a polynomial operation can report
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PolynomialError {
    /// The input to a constructor was not a usable coefficient sequence.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The operation has no defined result for its operands.
    #[error("undefined operation: {0}")]
    UndefinedOperation(&'static str),
}

pub type Result<T> = std::result::Result<T, PolynomialError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PolynomialError::InvalidArgument("empty coefficient sequence");
        assert_eq!(err.to_string(), "invalid argument: empty coefficient sequence");

        let err = PolynomialError::UndefinedOperation("division by the zero polynomial");
        assert_eq!(err.to_string(), "undefined operation: division by the zero polynomial");
    }
}
