//! Fitness evaluation
//!
//! This module provides the fitness abstraction and the quiz fitness function.

pub mod quiz;
pub mod traits;

pub mod prelude {
    pub use super::quiz::*;
    pub use super::traits::*;
}
