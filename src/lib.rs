//! # quiz-evo
//!
//! Adaptive quiz question selection driven by a generational genetic algorithm.
//!
//! A learner's running per-topic performance steers which questions are
//! worth asking next. Candidate question sets are evolved with tournament
//! selection, two-point crossover, index-shuffle mutation and single-elite
//! reinsertion, and the fittest set is returned.
//!
//! ## Core Concepts
//!
//! - **Question pool**: immutable bank of multiple-choice questions
//! - **Performance model**: per-topic score, raised by correct answers and
//!   lowered (never below 1) by wrong ones
//! - **Fitness**: topic weight times difficulty weight, minus one per repeated topic
//! - **Session**: asks one evolved question at a time and feeds answers back
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quiz_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let pool = QuestionPool::from_json_file("questions.json")?;
//! let performance = PerformanceModel::new();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let best = select_individual(&pool, &performance, 5, 50, 20, &mut rng)?;
//! for question in pool.resolve(best.genome()) {
//!     println!("{}", question.text);
//! }
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;
pub mod question;
pub mod session;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::question::prelude::*;
    pub use crate::session::prelude::*;
}
