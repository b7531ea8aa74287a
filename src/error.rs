use thiserror::Error;

/// Errors raised by positional and aggregate operations on a `LinkedSequence`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    #[error("position {position} is out of range for a sequence of length {len}")]
    OutOfRange { position: usize, len: usize },

    #[error("cannot pop position {position:?} from a sequence of length {len}")]
    EmptyOrOutOfRange { position: Option<usize>, len: usize },

    #[error("the sequence is empty")]
    EmptySequence,
}

/// Errors raised by `ArrayStack`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("the stack is empty")]
    EmptyStack,
}

pub type Result<T, E = SequenceError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let error = SequenceError::OutOfRange { position: 7, len: 3 };
        let display = format!("{}", error);
        assert!(display.contains("position 7"));
        assert!(display.contains("length 3"));
    }

    #[test]
    fn test_pop_error_display_without_position() {
        let error = SequenceError::EmptyOrOutOfRange { position: None, len: 0 };
        assert_eq!(error.to_string(), "cannot pop position None from a sequence of length 0");
    }

    #[test]
    fn test_stack_error_display() {
        assert_eq!(StackError::EmptyStack.to_string(), "the stack is empty");
    }
}
