//! Selection operators
//!
//! This module provides tournament selection and the helper that turns
//! selected indices into independent offspring.

use rand::Rng;

use crate::error::{EvolutionError, OperatorError};
use crate::fitness::traits::FitnessValue;
use crate::genome::traits::EvolutionaryGenome;
use crate::operators::traits::SelectionOperator;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Tournament selection operator
///
/// Samples `tournament_size` individuals uniformly with replacement and
/// picks the fittest. Ties go to the contestant drawn first.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Tournament of `tournament_size` draws
    ///
    /// # Panics
    ///
    /// If `tournament_size` is zero; see [`TournamentSelection::try_new`].
    pub fn new(tournament_size: usize) -> Self {
        match Self::try_new(tournament_size) {
            Ok(selection) => selection,
            Err(err) => panic!("{err}"),
        }
    }

    /// Tournament of `tournament_size` draws, rejecting a size of zero
    pub fn try_new(tournament_size: usize) -> Result<Self, OperatorError> {
        if tournament_size == 0 {
            return Err(OperatorError::InvalidConfiguration(
                "tournament size must be at least 1".to_string(),
            ));
        }
        Ok(Self { tournament_size })
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::new(3)
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> Result<usize, OperatorError> {
        if fitness.is_empty() {
            return Err(OperatorError::SelectionInput(
                "tournament drawn from an empty population".to_string(),
            ));
        }

        let mut winner = rng.gen_range(0..fitness.len());
        for _ in 1..self.tournament_size {
            let contestant = rng.gen_range(0..fitness.len());
            if fitness[contestant] > fitness[winner] {
                winner = contestant;
            }
        }
        Ok(winner)
    }
}

/// Select `count` individuals and return them as independent copies
///
/// The copies keep their cached fitness, so unchanged offspring need no
/// re-evaluation. Fails if the population is empty or any cached fitness
/// is stale.
pub fn select_individuals<G, F, S, R>(
    population: &Population<G, F>,
    selection: &S,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Individual<G, F>>, EvolutionError>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
    S: SelectionOperator,
    R: Rng,
{
    let fitness = population.fitness_values()?;
    let indices = selection.select_many(&fitness, count, rng)?;
    Ok(indices
        .into_iter()
        .map(|index| population[index].clone())
        .collect())
}
