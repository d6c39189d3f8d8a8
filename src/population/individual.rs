//! A candidate question set together with its cached score

use serde::{Deserialize, Serialize};

use crate::fitness::traits::{Fitness, FitnessValue};
use crate::genome::traits::EvolutionaryGenome;

/// A genome with a cached fitness
///
/// The cache is stale (`None`) from creation until evaluated, and goes
/// stale again whenever the genome is mutably borrowed. A present fitness
/// therefore always belongs to the current genome.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Individual<G, F = f64>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    genome: G,
    fitness: Option<F>,
}

impl<G, F> Individual<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    pub fn with_fitness(genome: G, fitness: F) -> Self {
        Self {
            genome,
            fitness: Some(fitness),
        }
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn is_stale(&self) -> bool {
        self.fitness.is_none()
    }

    pub fn fitness(&self) -> Option<&F> {
        self.fitness.as_ref()
    }

    pub fn fitness_f64(&self) -> Option<f64> {
        self.fitness.as_ref().map(FitnessValue::to_f64)
    }

    /// Score the genome if the cache is stale; returns whether it ran
    pub fn evaluate<Fit>(&mut self, fitness: &Fit) -> bool
    where
        Fit: Fitness<Genome = G, Value = F> + ?Sized,
    {
        if self.fitness.is_some() {
            return false;
        }
        self.fitness = Some(fitness.evaluate(&self.genome));
        true
    }

    pub fn genome(&self) -> &G {
        &self.genome
    }

    /// Mutable genome access; always marks the fitness stale
    pub fn genome_mut(&mut self) -> &mut G {
        self.fitness = None;
        &mut self.genome
    }

    /// Evaluated beats stale; two stale individuals are never better
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (&self.fitness, &other.fitness) {
            (Some(mine), Some(theirs)) => mine.is_better_than(theirs),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}

impl<G, F> PartialEq for Individual<G, F>
where
    G: EvolutionaryGenome + PartialEq,
    F: FitnessValue + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.genome == other.genome && self.fitness == other.fitness
    }
}
