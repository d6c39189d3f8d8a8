//! Error types for quiz-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for operator failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// Selection was asked to draw from an empty or unevaluated pool
    #[error("Selection input error: {0}")]
    SelectionInput(String),

    /// Crossover operation failed
    #[error("Crossover failed: {0}")]
    CrossoverFailed(String),

    /// Invalid operator configuration
    #[error("Invalid operator configuration: {0}")]
    InvalidConfiguration(String),
}

/// Top-level error type for evolution operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    /// Invalid configuration, raised before any generation runs
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Operator error
    #[error("Operator error: {0}")]
    Operator(#[from] OperatorError),

    /// An individual's cached fitness was read while stale
    #[error("Individual {0} has no valid fitness")]
    UnevaluatedIndividual(usize),

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,

    /// A genome referred to a question id outside the pool
    #[error("Question q{0} is not in the pool")]
    UnknownQuestion(usize),
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

/// Error type for loading and validating a question bank
#[derive(Debug, Error)]
pub enum QuestionBankError {
    /// IO error while reading the bank
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The bank is not valid JSON for the question schema
    #[error("Malformed question bank: {0}")]
    Json(#[from] serde_json::Error),

    /// A question violates the bank's field requirements
    #[error("Invalid question at index {index}: {reason}")]
    InvalidQuestion { index: usize, reason: String },
}

/// Learner input that does not map onto one of the offered choices
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerParseError {
    /// Input is not a number
    #[error("Answer is not a number: {0:?}")]
    NotANumber(String),

    /// Input is a number but not one of the offered choices
    #[error("Choice {choice} is out of range (1-{available})")]
    OutOfRange { choice: usize, available: usize },
}

/// Error type for quiz session operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// Question selection failed
    #[error("Question selection failed: {0}")]
    Evolution(#[from] EvolutionError),

    /// An answer was submitted with no question outstanding
    #[error("No question is waiting for an answer")]
    NoPendingQuestion,

    /// Every configured question has already been asked
    #[error("Session already asked all {0} questions")]
    SessionComplete(usize),

    /// Session settings are unusable
    #[error("Invalid session configuration: {0}")]
    InvalidConfiguration(String),

    /// Session settings file could not be read
    #[error("Failed to read session configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Session settings are not valid JSON
    #[error("Failed to parse session configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_error_display() {
        let err = OperatorError::SelectionInput("population is empty".to_string());
        assert_eq!(err.to_string(), "Selection input error: population is empty");

        let err = OperatorError::CrossoverFailed("length mismatch".to_string());
        assert_eq!(err.to_string(), "Crossover failed: length mismatch");
    }

    #[test]
    fn test_evolution_error_from_operator_error() {
        let op_err = OperatorError::SelectionInput("empty".to_string());
        let evo_err: EvolutionError = op_err.into();
        assert!(matches!(evo_err, EvolutionError::Operator(_)));
    }

    #[test]
    fn test_unknown_question_display() {
        let err: SessionError = EvolutionError::UnknownQuestion(12).into();
        assert_eq!(
            err.to_string(),
            "Question selection failed: Question q12 is not in the pool"
        );
    }

    #[test]
    fn test_answer_parse_error_display() {
        let err = AnswerParseError::OutOfRange {
            choice: 7,
            available: 4,
        };
        assert_eq!(err.to_string(), "Choice 7 is out of range (1-4)");

        let err = AnswerParseError::NotANumber("abc".to_string());
        assert_eq!(err.to_string(), "Answer is not a number: \"abc\"");
    }

    #[test]
    fn test_question_bank_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: QuestionBankError = json_err.into();
        assert!(matches!(err, QuestionBankError::Json(_)));
    }

    #[test]
    fn test_session_error_from_evolution_error() {
        let err: SessionError = EvolutionError::Configuration("empty pool".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Question selection failed: Invalid configuration: empty pool"
        );
    }
}
