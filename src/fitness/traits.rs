//! Fitness traits
//!
//! Scores are maximised. Integer scores are the norm for quiz selection;
//! `f64` is kept for selection input and statistics.

use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

use crate::genome::traits::EvolutionaryGenome;

/// A comparable score that can be fed to selection as `f64`
pub trait FitnessValue:
    PartialOrd + Clone + Send + Sync + Debug + Serialize + DeserializeOwned + 'static
{
    fn to_f64(&self) -> f64;

    /// Strictly greater; equal scores are never better than each other
    fn is_better_than(&self, other: &Self) -> bool {
        self > other
    }
}

impl FitnessValue for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }
}

impl FitnessValue for i64 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

/// Thread-safety required of fitness functions when evaluation can run on
/// the rayon pool
#[cfg(feature = "parallel")]
pub trait EvaluatorBounds: Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Send + Sync + ?Sized> EvaluatorBounds for T {}

#[cfg(not(feature = "parallel"))]
pub trait EvaluatorBounds {}
#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> EvaluatorBounds for T {}

/// Scores a genome; higher is better
///
/// Must be pure: the same genome always gets the same score, so a
/// population can be scored in any order or in parallel.
pub trait Fitness: EvaluatorBounds {
    type Genome: EvolutionaryGenome;
    type Value: FitnessValue;

    fn evaluate(&self, genome: &Self::Genome) -> Self::Value;
}

/// Adapts a closure into a [`Fitness`]
pub struct FnFitness<G, F, V>
where
    F: Fn(&G) -> V,
{
    f: F,
    _marker: std::marker::PhantomData<fn(&G) -> V>,
}

impl<G, F, V> FnFitness<G, F, V>
where
    F: Fn(&G) -> V,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<G, F, V> Fitness for FnFitness<G, F, V>
where
    G: EvolutionaryGenome,
    F: Fn(&G) -> V + Send + Sync,
    V: FitnessValue,
{
    type Genome = G;
    type Value = V;

    fn evaluate(&self, genome: &Self::Genome) -> Self::Value {
        (self.f)(genome)
    }
}
