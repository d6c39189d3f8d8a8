//! Mutation operators
//!
//! This module provides index-shuffle mutation, which moves genes around
//! without introducing new alleles.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::traits::EvolutionaryGenome;
use crate::operators::traits::MutationOperator;

/// Index-shuffle mutation
///
/// Visits each position in order and, with probability `indpb`, swaps it
/// with a different position chosen uniformly. Genomes shorter than two
/// genes are left untouched.
#[derive(Clone, Debug)]
pub struct ShuffleIndexesMutation {
    /// Per-gene swap probability
    pub indpb: f64,
}

impl ShuffleIndexesMutation {
    /// Shuffle mutation with per-gene probability `indpb`
    ///
    /// # Panics
    ///
    /// If `indpb` is outside `[0, 1]` or NaN; see
    /// [`ShuffleIndexesMutation::try_new`].
    pub fn new(indpb: f64) -> Self {
        match Self::try_new(indpb) {
            Ok(mutation) => mutation,
            Err(err) => panic!("{err}"),
        }
    }

    /// Shuffle mutation, rejecting a probability outside `[0, 1]` or NaN
    pub fn try_new(indpb: f64) -> Result<Self, OperatorError> {
        if !(0.0..=1.0).contains(&indpb) {
            return Err(OperatorError::InvalidConfiguration(format!(
                "shuffle probability must be in [0, 1], got {indpb}"
            )));
        }
        Ok(Self { indpb })
    }
}

impl Default for ShuffleIndexesMutation {
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl<G: EvolutionaryGenome> MutationOperator<G> for ShuffleIndexesMutation {
    fn mutate<R: Rng>(&self, genome: &mut G, rng: &mut R) -> usize {
        let len = genome.dimension();
        if len < 2 {
            return 0;
        }

        let genes = genome.genes_mut();
        let mut swaps = 0;
        for i in 0..len {
            if rng.gen::<f64>() < self.indpb {
                let mut j = rng.gen_range(0..len - 1);
                if j >= i {
                    j += 1;
                }
                genes.swap(i, j);
                swaps += 1;
            }
        }
        swaps
    }
}
