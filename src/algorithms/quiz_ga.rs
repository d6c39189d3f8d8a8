//! Quiz Genetic Algorithm
//!
//! This module implements the generational genetic algorithm that evolves
//! question sets, plus the entry points used by quiz sessions.
//!
//! Each generation runs in a fixed order so that a seeded random source
//! reproduces the same result:
//!
//! 1. evaluate every stale individual
//! 2. clone the elite (best fitness, lowest index on ties)
//! 3. tournament-select `population_size - 1` offspring
//! 4. pairwise crossover draws over consecutive offspring
//! 5. per-offspring mutation draws
//! 6. append the elite and advance the generation counter
//!
//! After the final generation the population is evaluated once more and
//! its best individual is returned.

use std::marker::PhantomData;
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::diagnostics::{EvolutionResult, EvolutionStats, GenerationStats};
use crate::error::{EvoResult, EvolutionError, OperatorError};
use crate::fitness::quiz::QuizFitness;
use crate::fitness::traits::{Fitness, FitnessValue};
use crate::genome::bounds::GenomeBounds;
use crate::genome::question_set::QuestionSet;
use crate::genome::traits::EvolutionaryGenome;
use crate::operators::crossover::TwoPointCrossover;
use crate::operators::mutation::ShuffleIndexesMutation;
use crate::operators::selection::{select_individuals, TournamentSelection};
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::individual::Individual;
use crate::population::population::Population;
use crate::question::{PerformanceModel, Question, QuestionPool};

/// Configuration for the Quiz GA
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizGAConfig {
    /// Population size
    pub population_size: usize,
    /// Questions per individual
    pub num_questions: usize,
    /// Number of generations to run
    pub generations: usize,
    /// Probability that a consecutive offspring pair is crossed over
    pub crossover_probability: f64,
    /// Probability that an offspring is mutated
    pub mutation_probability: f64,
    /// Tournament size for selection
    pub tournament_size: usize,
    /// Per-gene swap probability inside a mutation
    pub shuffle_probability: f64,
    /// Whether to evaluate in parallel
    pub parallel_evaluation: bool,
}

impl Default for QuizGAConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            num_questions: 10,
            generations: 50,
            crossover_probability: 0.7,
            mutation_probability: 0.2,
            tournament_size: 3,
            shuffle_probability: 0.2,
            parallel_evaluation: true,
        }
    }
}

impl QuizGAConfig {
    /// Set the population size
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the number of questions per individual
    pub fn with_num_questions(mut self, count: usize) -> Self {
        self.num_questions = count;
        self
    }

    /// Set the generation budget
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Set the crossover probability
    pub fn with_crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability;
        self
    }

    /// Set the mutation probability
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    /// Set the tournament size
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Set the per-gene shuffle probability
    pub fn with_shuffle_probability(mut self, probability: f64) -> Self {
        self.shuffle_probability = probability;
        self
    }

    /// Enable or disable parallel evaluation
    pub fn with_parallel_evaluation(mut self, enabled: bool) -> Self {
        self.parallel_evaluation = enabled;
        self
    }

    /// Check the configuration before any generation runs
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size == 0 {
            return Err(EvolutionError::Configuration(
                "population size must be positive".to_string(),
            ));
        }
        if self.num_questions == 0 {
            return Err(EvolutionError::Configuration(
                "number of questions must be positive".to_string(),
            ));
        }
        if self.generations == 0 {
            return Err(EvolutionError::Configuration(
                "generation budget must be positive".to_string(),
            ));
        }
        TournamentSelection::try_new(self.tournament_size)?;
        ShuffleIndexesMutation::try_new(self.shuffle_probability)?;
        for (name, probability) in [
            ("crossover probability", self.crossover_probability),
            ("mutation probability", self.mutation_probability),
        ] {
            if !(0.0..=1.0).contains(&probability) {
                return Err(OperatorError::InvalidConfiguration(format!(
                    "{name} must be in [0, 1], got {probability}"
                ))
                .into());
            }
        }
        Ok(())
    }
}

/// Builder for QuizGA
pub struct QuizGABuilder<G, F, S, C, M, Fit>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    config: QuizGAConfig,
    bounds: Option<GenomeBounds>,
    selection: Option<S>,
    crossover: Option<C>,
    mutation: Option<M>,
    fitness: Option<Fit>,
    _phantom: PhantomData<(G, F)>,
}

impl<G, F> QuizGABuilder<G, F, (), (), (), ()>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: QuizGAConfig::default(),
            bounds: None,
            selection: None,
            crossover: None,
            mutation: None,
            fitness: None,
            _phantom: PhantomData,
        }
    }
}

impl<G, F> Default for QuizGABuilder<G, F, (), (), (), ()>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G, F, S, C, M, Fit> QuizGABuilder<G, F, S, C, M, Fit>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    /// Replace the whole configuration
    pub fn config(mut self, config: QuizGAConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the generation budget
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.generations = generations;
        self
    }

    /// Set the crossover probability
    pub fn crossover_probability(mut self, probability: f64) -> Self {
        self.config.crossover_probability = probability;
        self
    }

    /// Set the mutation probability
    pub fn mutation_probability(mut self, probability: f64) -> Self {
        self.config.mutation_probability = probability;
        self
    }

    /// Enable or disable parallel evaluation
    pub fn parallel_evaluation(mut self, enabled: bool) -> Self {
        self.config.parallel_evaluation = enabled;
        self
    }

    /// Set the genome bounds (allele count and genome length)
    pub fn bounds(mut self, bounds: GenomeBounds) -> Self {
        self.config.num_questions = bounds.length;
        self.bounds = Some(bounds);
        self
    }

    /// Set the selection operator
    pub fn selection<NewS>(self, selection: NewS) -> QuizGABuilder<G, F, NewS, C, M, Fit>
    where
        NewS: SelectionOperator,
    {
        QuizGABuilder {
            config: self.config,
            bounds: self.bounds,
            selection: Some(selection),
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: self.fitness,
            _phantom: PhantomData,
        }
    }

    /// Set the crossover operator
    pub fn crossover<NewC>(self, crossover: NewC) -> QuizGABuilder<G, F, S, NewC, M, Fit>
    where
        NewC: CrossoverOperator<G>,
    {
        QuizGABuilder {
            config: self.config,
            bounds: self.bounds,
            selection: self.selection,
            crossover: Some(crossover),
            mutation: self.mutation,
            fitness: self.fitness,
            _phantom: PhantomData,
        }
    }

    /// Set the mutation operator
    pub fn mutation<NewM>(self, mutation: NewM) -> QuizGABuilder<G, F, S, C, NewM, Fit>
    where
        NewM: MutationOperator<G>,
    {
        QuizGABuilder {
            config: self.config,
            bounds: self.bounds,
            selection: self.selection,
            crossover: self.crossover,
            mutation: Some(mutation),
            fitness: self.fitness,
            _phantom: PhantomData,
        }
    }

    /// Set the fitness function
    pub fn fitness<NewFit>(self, fitness: NewFit) -> QuizGABuilder<G, F, S, C, M, NewFit>
    where
        NewFit: Fitness<Genome = G, Value = F>,
    {
        QuizGABuilder {
            config: self.config,
            bounds: self.bounds,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            fitness: Some(fitness),
            _phantom: PhantomData,
        }
    }
}

impl<G, F, S, C, M, Fit> QuizGABuilder<G, F, S, C, M, Fit>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
    S: SelectionOperator,
    C: CrossoverOperator<G>,
    M: MutationOperator<G>,
    Fit: Fitness<Genome = G, Value = F>,
{
    /// Build the QuizGA instance
    #[allow(clippy::type_complexity)]
    pub fn build(self) -> EvoResult<QuizGA<G, F, S, C, M, Fit>> {
        let bounds = self
            .bounds
            .ok_or_else(|| EvolutionError::Configuration("Bounds must be specified".to_string()))?;

        let selection = self.selection.ok_or_else(|| {
            EvolutionError::Configuration("Selection operator must be specified".to_string())
        })?;

        let crossover = self.crossover.ok_or_else(|| {
            EvolutionError::Configuration("Crossover operator must be specified".to_string())
        })?;

        let mutation = self.mutation.ok_or_else(|| {
            EvolutionError::Configuration("Mutation operator must be specified".to_string())
        })?;

        let fitness = self.fitness.ok_or_else(|| {
            EvolutionError::Configuration("Fitness function must be specified".to_string())
        })?;

        self.config.validate()?;

        Ok(QuizGA {
            config: self.config,
            bounds,
            selection,
            crossover,
            mutation,
            fitness,
            _phantom: PhantomData,
        })
    }
}

/// Quiz Genetic Algorithm
///
/// A generational GA with single-elite reinsertion and a fixed
/// generation budget.
pub struct QuizGA<G, F, S, C, M, Fit>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
{
    config: QuizGAConfig,
    bounds: GenomeBounds,
    selection: S,
    crossover: C,
    mutation: M,
    fitness: Fit,
    _phantom: PhantomData<(G, F)>,
}

/// The operator set used to pick quiz questions
pub type StandardQuizGA<'a> = QuizGA<
    QuestionSet,
    i64,
    TournamentSelection,
    TwoPointCrossover,
    ShuffleIndexesMutation,
    QuizFitness<'a>,
>;

impl<'a> StandardQuizGA<'a> {
    /// Tournament selection, two-point crossover and index-shuffle
    /// mutation over `pool`, scored against `performance`
    pub fn for_pool(
        pool: &'a QuestionPool,
        performance: &'a PerformanceModel,
        config: QuizGAConfig,
    ) -> EvoResult<Self> {
        let bounds = pool.bounds(config.num_questions)?;
        config.validate()?;

        QuizGABuilder::new()
            .selection(TournamentSelection::try_new(config.tournament_size)?)
            .crossover(TwoPointCrossover::new())
            .mutation(ShuffleIndexesMutation::try_new(config.shuffle_probability)?)
            .fitness(QuizFitness::new(pool, performance))
            .config(config)
            .bounds(bounds)
            .build()
    }
}

impl<G, F, S, C, M, Fit> QuizGA<G, F, S, C, M, Fit>
where
    G: EvolutionaryGenome,
    F: FitnessValue,
    S: SelectionOperator,
    C: CrossoverOperator<G>,
    M: MutationOperator<G>,
    Fit: Fitness<Genome = G, Value = F> + Sync,
{
    /// Create a builder for QuizGA
    pub fn builder() -> QuizGABuilder<G, F, (), (), (), ()> {
        QuizGABuilder::new()
    }

    /// The configuration this instance runs with
    pub fn config(&self) -> &QuizGAConfig {
        &self.config
    }

    /// Evaluate stale individuals, returning the evaluation count
    fn evaluate(&self, population: &mut Population<G, F>) -> usize {
        if self.config.parallel_evaluation {
            population.evaluate_parallel(&self.fitness)
        } else {
            population.evaluate(&self.fitness)
        }
    }

    /// Produce the next generation from an evaluated population
    fn next_generation<R: Rng>(
        &self,
        population: &Population<G, F>,
        rng: &mut R,
    ) -> EvoResult<Population<G, F>> {
        let elite = population
            .best()
            .ok_or(EvolutionError::EmptyPopulation)?
            .clone();

        let mut offspring = select_individuals(
            population,
            &self.selection,
            self.config.population_size - 1,
            rng,
        )?;

        for pair in offspring.chunks_exact_mut(2) {
            if let [first, second] = pair {
                let crosses = rng.gen::<f64>() < self.config.crossover_probability;
                if crosses && first.genome().dimension() > 1 && second.genome().dimension() > 1
                {
                    self.crossover
                        .crossover(first.genome_mut(), second.genome_mut(), rng)?;
                }
            }
        }

        for individual in offspring.iter_mut() {
            let mutates = rng.gen::<f64>() < self.config.mutation_probability;
            if mutates && individual.genome().dimension() > 1 {
                let mut genome = individual.genome().clone();
                if self.mutation.mutate(&mut genome, rng) > 0 {
                    *individual.genome_mut() = genome;
                }
            }
        }

        offspring.push(elite);

        let mut next = Population::from_individuals(offspring);
        next.set_generation(population.generation() + 1);
        Ok(next)
    }

    /// Run the genetic algorithm
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionResult<G, F>> {
        let start_time = Instant::now();

        let mut population: Population<G, F> =
            Population::initialize(self.config.population_size, &self.bounds, rng)?;

        let mut stats = EvolutionStats::new();
        let mut evaluations = 0;

        while population.generation() < self.config.generations {
            evaluations += self.evaluate(&mut population);

            let gen_stats =
                GenerationStats::from_population(&population, population.generation(), evaluations);
            debug!(
                generation = gen_stats.generation,
                best = gen_stats.best_fitness,
                mean = gen_stats.mean_fitness,
                evaluations,
                "generation evaluated"
            );
            stats.record(gen_stats);

            population = self.next_generation(&population, rng)?;
        }

        evaluations += self.evaluate(&mut population);
        stats.record(GenerationStats::from_population(
            &population,
            population.generation(),
            evaluations,
        ));
        stats.set_runtime(start_time.elapsed());

        let best = population
            .best()
            .ok_or(EvolutionError::EmptyPopulation)?
            .clone();

        info!(
            generations = population.generation(),
            evaluations,
            best = ?best.fitness(),
            runtime_ms = stats.total_runtime_ms,
            "evolution finished"
        );

        Ok(EvolutionResult::new(best, population.generation(), evaluations).with_stats(stats))
    }
}

/// Evolve `num_questions` questions from `pool` and return the fittest set
///
/// Fails with [`EvolutionError::Configuration`] if the pool is empty or any
/// size parameter is zero.
pub fn select_individual<R: Rng>(
    pool: &QuestionPool,
    performance: &PerformanceModel,
    num_questions: usize,
    generations: usize,
    population_size: usize,
    rng: &mut R,
) -> EvoResult<Individual<QuestionSet, i64>> {
    let config = QuizGAConfig::default()
        .with_num_questions(num_questions)
        .with_generations(generations)
        .with_population_size(population_size);

    Ok(StandardQuizGA::for_pool(pool, performance, config)?
        .run(rng)?
        .best)
}

/// Evolve a single next question
///
/// `config.num_questions` is ignored; one question is selected.
pub fn select_question<'p, R: Rng>(
    pool: &'p QuestionPool,
    performance: &PerformanceModel,
    config: &QuizGAConfig,
    rng: &mut R,
) -> EvoResult<&'p Question> {
    let config = config.clone().with_num_questions(1);
    let result = StandardQuizGA::for_pool(pool, performance, config)?.run(rng)?;

    let id = result
        .best_genome()
        .first()
        .ok_or(EvolutionError::EmptyPopulation)?;
    pool.lookup(id)
}

/// Evolve a whole quiz of `config.num_questions` questions
pub fn select_quiz<'p, R: Rng>(
    pool: &'p QuestionPool,
    performance: &PerformanceModel,
    config: &QuizGAConfig,
    rng: &mut R,
) -> EvoResult<Vec<&'p Question>> {
    let result = StandardQuizGA::for_pool(pool, performance, config.clone())?.run(rng)?;
    result
        .best_genome()
        .iter()
        .map(|id| pool.lookup(id))
        .collect()
}
