// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error taxonomy for interval construction and identification.

use thiserror::Error;

/// Errors returned by the interval calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// The argument list itself is absent
    #[error("passed argument list is missing")]
    MissingArguments,

    /// Argument list length outside [2, 3]
    #[error("illegal number of arguments: expected 2 or 3, got {got}")]
    ArgumentCount { got: usize },

    /// A required argument slot holds no value
    #[error("argument {index} is null")]
    NullArgument { index: usize },

    #[error("note {0:?} failed syntax verification")]
    InvalidNoteSyntax(String),

    #[error("cannot identify note letter {0:?}")]
    UnknownNoteLetter(char),

    /// Interval name absent from the interval table
    #[error("cannot identify interval {0:?}")]
    UnknownInterval(String),

    /// Spelling the result would overflow the accidental count
    #[error("{letter} with {accidentals} accidentals is out of range")]
    AccidentalOverflow { letter: char, accidentals: i32 },

    #[error("unknown direction {0:?}: expected \"asc\" or \"dsc\"")]
    InvalidDirection(String),

    /// No table entry spans this (degree, semitones) pair
    #[error("no interval spans degree {degree} with {semitones} semitones")]
    IntervalNotFound { degree: u8, semitones: i32 },
}

/// Result alias for calculator operations
pub type Result<T> = std::result::Result<T, IntervalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            IntervalError::ArgumentCount { got: 4 }.to_string(),
            "illegal number of arguments: expected 2 or 3, got 4"
        );
        assert_eq!(
            IntervalError::InvalidNoteSyntax("Ab#".to_string()).to_string(),
            "note \"Ab#\" failed syntax verification"
        );
        assert_eq!(
            IntervalError::IntervalNotFound { degree: 2, semitones: 3 }.to_string(),
            "no interval spans degree 2 with 3 semitones"
        );
        assert_eq!(
            IntervalError::AccidentalOverflow { letter: 'G', accidentals: -129 }.to_string(),
            "G with -129 accidentals is out of range"
        );
    }
}
