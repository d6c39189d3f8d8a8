//! Per-generation statistics and the outcome of a search run

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::fitness::traits::FitnessValue;
use crate::genome::traits::EvolutionaryGenome;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Snapshot of one evaluated population
///
/// Stale individuals count towards `population_size` but not towards the
/// fitness figures. With no evaluated individual the best fitness is
/// `-inf`, the worst `+inf` and the mean 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub generation: usize,
    /// Fitness evaluations performed up to and including this snapshot
    pub evaluations: usize,
    pub population_size: usize,
    pub best_fitness: f64,
    pub worst_fitness: f64,
    pub mean_fitness: f64,
    /// Mean pairwise Hamming distance between question sets
    pub diversity: f64,
}

impl GenerationStats {
    pub fn from_population<G, F>(
        population: &Population<G, F>,
        generation: usize,
        evaluations: usize,
    ) -> Self
    where
        G: EvolutionaryGenome,
        F: FitnessValue,
    {
        let fitness_of = |individual: Option<&Individual<G, F>>| {
            individual.and_then(Individual::fitness_f64)
        };
        Self {
            generation,
            evaluations,
            population_size: population.len(),
            best_fitness: fitness_of(population.best()).unwrap_or(f64::NEG_INFINITY),
            worst_fitness: fitness_of(population.worst()).unwrap_or(f64::INFINITY),
            mean_fitness: population.mean_fitness().unwrap_or(0.0),
            diversity: population.diversity(),
        }
    }
}

/// Snapshots of every evaluation pass of a run, the final one included
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    pub generations: Vec<GenerationStats>,
    pub total_runtime_ms: f64,
}

impl EvolutionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Number of evaluation passes recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    pub fn final_best_fitness(&self) -> Option<f64> {
        self.generations.last().map(|g| g.best_fitness)
    }

    /// Best fitness per pass; non-decreasing under elitism
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    pub fn population_size_history(&self) -> Vec<usize> {
        self.generations.iter().map(|g| g.population_size).collect()
    }

    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }
}

/// Outcome of a search run: the elite of the final population
#[derive(Clone, Debug)]
pub struct EvolutionResult<G, F = f64>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    pub best: Individual<G, F>,
    /// Generations bred, excluding the initial population
    pub generations: usize,
    pub evaluations: usize,
    pub stats: EvolutionStats,
}

impl<G, F> EvolutionResult<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    pub fn new(best: Individual<G, F>, generations: usize, evaluations: usize) -> Self {
        Self {
            best,
            generations,
            evaluations,
            stats: EvolutionStats::new(),
        }
    }

    pub fn with_stats(mut self, stats: EvolutionStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn best_genome(&self) -> &G {
        self.best.genome()
    }

    pub fn best_fitness(&self) -> Option<&F> {
        self.best.fitness()
    }
}

pub mod prelude {
    pub use super::{EvolutionResult, EvolutionStats, GenerationStats};
}
