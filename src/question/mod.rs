//! Question bank and learner performance
//!
//! This module provides the immutable question pool the engine searches
//! over, and the per-topic performance model that weights the search.

pub mod performance;
pub mod pool;
#[allow(clippy::module_inception)]
pub mod question;

pub use performance::PerformanceModel;
pub use pool::QuestionPool;
pub use question::{Difficulty, Question, QuestionId, SourceContext};

pub mod prelude {
    pub use super::performance::*;
    pub use super::pool::*;
    pub use super::question::*;
}
