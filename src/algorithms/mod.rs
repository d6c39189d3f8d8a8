//! Evolutionary algorithms
//!
//! This module provides the generational GA that evolves question sets.

pub mod quiz_ga;

pub mod prelude {
    pub use super::quiz_ga::*;
}
