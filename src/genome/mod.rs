//! Genome abstractions and implementations
//!
//! This module provides the core `EvolutionaryGenome` trait and the
//! question-set genome used for quiz selection.

pub mod bounds;
pub mod question_set;
pub mod traits;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::question_set::*;
    pub use super::traits::*;
}
