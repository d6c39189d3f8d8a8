//! Adaptive quiz sessions
//!
//! A session asks one evolved question at a time, scores the learner's
//! answer and feeds the outcome back into the performance model before
//! the next question is evolved.

pub mod config;
pub mod quiz_session;

pub use config::SessionConfig;
pub use quiz_session::{
    parse_choice, AnswerOutcome, AnswerProvider, AskedQuestion, QuizSession, SessionSummary,
    TopicTally,
};

pub mod prelude {
    pub use super::config::*;
    pub use super::quiz_session::*;
}
