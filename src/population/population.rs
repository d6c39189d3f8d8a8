//! Population of candidate question sets
//!
//! A generation of the search: the individuals plus the generation counter.

use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::EvolutionError;
use crate::fitness::traits::{Fitness, FitnessValue};
use crate::genome::bounds::GenomeBounds;
use crate::genome::traits::EvolutionaryGenome;
use crate::population::individual::Individual;

/// One generation of the search
#[derive(Clone, Debug)]
pub struct Population<G, F = f64>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    individuals: Vec<Individual<G, F>>,
    generation: usize,
}

impl<G, F> Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// An empty generation zero
    pub fn new() -> Self {
        Self::from_individuals(Vec::new())
    }

    /// Wrap already-built individuals as generation zero
    pub fn from_individuals(individuals: Vec<Individual<G, F>>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Draw `size` stale individuals whose genes are independent uniform
    /// picks from the bounds' alphabet
    ///
    /// A zero size is a configuration error.
    pub fn initialize<R: Rng>(
        size: usize,
        bounds: &GenomeBounds,
        rng: &mut R,
    ) -> Result<Self, EvolutionError> {
        if size == 0 {
            return Err(EvolutionError::Configuration(
                "population size must be positive".to_string(),
            ));
        }
        Ok((0..size)
            .map(|_| Individual::new(G::generate(rng, bounds)))
            .collect::<Vec<_>>()
            .into())
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn push(&mut self, individual: Individual<G, F>) {
        self.individuals.push(individual);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual<G, F>> {
        self.individuals.iter()
    }

    /// Index of the fittest evaluated individual; the lowest index wins ties
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<(usize, &F)> = None;
        for (index, individual) in self.individuals.iter().enumerate() {
            if let Some(fitness) = individual.fitness() {
                match best {
                    Some((_, current)) if !fitness.is_better_than(current) => {}
                    _ => best = Some((index, fitness)),
                }
            }
        }
        best.map(|(index, _)| index)
    }

    /// The elite: fittest evaluated individual, first index on ties
    pub fn best(&self) -> Option<&Individual<G, F>> {
        self.best_index().map(|index| &self.individuals[index])
    }

    /// Least fit evaluated individual
    pub fn worst(&self) -> Option<&Individual<G, F>> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .fold(None, |worst, candidate| match worst {
                Some(current) if !current.is_better_than(candidate) => Some(current),
                _ => Some(candidate),
            })
    }

    pub fn all_evaluated(&self) -> bool {
        self.individuals.iter().all(Individual::is_evaluated)
    }

    /// Fitness of every individual in population order, for selection
    ///
    /// Fails if any individual's cached fitness is stale.
    pub fn fitness_values(&self) -> Result<Vec<f64>, EvolutionError> {
        self.individuals
            .iter()
            .enumerate()
            .map(|(index, individual)| {
                individual
                    .fitness_f64()
                    .ok_or(EvolutionError::UnevaluatedIndividual(index))
            })
            .collect()
    }

    /// Score every stale individual in order, returning how many were scored
    pub fn evaluate<Fit>(&mut self, fitness: &Fit) -> usize
    where
        Fit: Fitness<Genome = G, Value = F>,
    {
        self.individuals
            .iter_mut()
            .map(|individual| usize::from(individual.evaluate(fitness)))
            .sum()
    }

    pub fn mean_fitness(&self) -> Option<f64> {
        let (sum, count) = self
            .individuals
            .iter()
            .filter_map(Individual::fitness_f64)
            .fold((0.0, 0usize), |(sum, count), f| (sum + f, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Mean pairwise genome distance; zero below two individuals
    pub fn diversity(&self) -> f64 {
        let n = self.len();
        if n < 2 {
            return 0.0;
        }
        let total: f64 = self
            .individuals
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                self.individuals[i + 1..]
                    .iter()
                    .map(move |b| a.genome().distance(b.genome()))
            })
            .sum();
        total / (n * (n - 1) / 2) as f64
    }
}

#[cfg(feature = "parallel")]
impl<G, F> Population<G, F>
where
    G: EvolutionaryGenome + Send + Sync,
    F: FitnessValue + Send,
{
    /// Score every stale individual on the rayon pool
    ///
    /// Each evaluation reads only its own genome, so results match
    /// [`Population::evaluate`].
    pub fn evaluate_parallel<Fit>(&mut self, fitness: &Fit) -> usize
    where
        Fit: Fitness<Genome = G, Value = F> + Sync,
    {
        self.individuals
            .par_iter_mut()
            .map(|individual| usize::from(individual.evaluate(fitness)))
            .sum()
    }
}

#[cfg(not(feature = "parallel"))]
impl<G, F> Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    pub fn evaluate_parallel<Fit>(&mut self, fitness: &Fit) -> usize
    where
        Fit: Fitness<Genome = G, Value = F>,
    {
        self.evaluate(fitness)
    }
}

impl<G, F> From<Vec<Individual<G, F>>> for Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    fn from(individuals: Vec<Individual<G, F>>) -> Self {
        Self::from_individuals(individuals)
    }
}

impl<G, F> std::ops::Index<usize> for Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    type Output = Individual<G, F>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<G, F> Default for Population<G, F>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    fn default() -> Self {
        Self::new()
    }
}
