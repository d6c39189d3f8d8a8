//! Operator traits
//!
//! This module defines the core operator traits for genetic algorithms.
//! Operators receive the random source explicitly so that a seeded run
//! is reproducible.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::traits::EvolutionaryGenome;

/// Selection operator trait
///
/// Selects individuals from a population for reproduction.
pub trait SelectionOperator: Send + Sync {
    /// Select a single individual
    ///
    /// `fitness` holds one value per individual in population order.
    /// Returns the index of the selected individual.
    fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> Result<usize, OperatorError>;

    /// Select `count` individuals, drawing in order
    fn select_many<R: Rng>(
        &self,
        fitness: &[f64],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, OperatorError> {
        (0..count).map(|_| self.select(fitness, rng)).collect()
    }
}

/// Crossover operator trait
///
/// Exchanges genetic material between two genomes in place.
pub trait CrossoverOperator<G: EvolutionaryGenome>: Send + Sync {
    /// Apply crossover to two genomes
    fn crossover<R: Rng>(&self, first: &mut G, second: &mut G, rng: &mut R)
        -> Result<(), OperatorError>;
}

/// Mutation operator trait
///
/// Applies random changes to a genome.
pub trait MutationOperator<G: EvolutionaryGenome>: Send + Sync {
    /// Apply mutation to a genome in place
    ///
    /// Returns the number of genes that were moved.
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R) -> usize;
}
