//! Execution failures of the Read/Write language

use thiserror::Error;

/// Failure raised by [`Execute`](crate::interpreter::Execute) while running a
/// program.
///
/// # Examples
///
/// ```
/// use read_write_sample::ProgramError;
///
/// let error = ProgramError::OutputFull { capacity: 2 };
/// assert_eq!(error.to_string(), "output buffer is full (capacity 2)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProgramError {
    /// The program tried to write a negative number.
    #[error("cannot write negative value {0}")]
    NegativeWrite(i32),

    /// The output buffer has no room for another value.
    #[error("output buffer is full (capacity {capacity})")]
    OutputFull {
        /// Maximum number of values the buffer holds
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ProgramError::NegativeWrite(-3), "cannot write negative value -3")]
    #[case(ProgramError::OutputFull { capacity: 0 }, "output buffer is full (capacity 0)")]
    fn test_program_error_display(#[case] error: ProgramError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_program_error_error_trait() {
        let error = ProgramError::NegativeWrite(-1);
        let _: &dyn std::error::Error = &error;
    }
}
