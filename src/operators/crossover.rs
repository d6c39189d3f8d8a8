//! Crossover operators
//!
//! This module provides two-point crossover for fixed-length genomes.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::traits::EvolutionaryGenome;
use crate::operators::traits::CrossoverOperator;

/// Two-point crossover
///
/// Picks two distinct cut points `i < j` in `0..=len` and exchanges the
/// genes in `[i, j)` between the parents. Genomes shorter than two genes
/// are left untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoPointCrossover;

impl TwoPointCrossover {
    pub fn new() -> Self {
        Self
    }

    /// Draw two distinct, ordered cut points in `0..=len`
    fn cut_points<R: Rng>(len: usize, rng: &mut R) -> (usize, usize) {
        let first = rng.gen_range(0..=len);
        let mut second = rng.gen_range(0..len);
        if second >= first {
            second += 1;
        }

        if first < second {
            (first, second)
        } else {
            (second, first)
        }
    }
}

impl<G: EvolutionaryGenome> CrossoverOperator<G> for TwoPointCrossover {
    fn crossover<R: Rng>(
        &self,
        first: &mut G,
        second: &mut G,
        rng: &mut R,
    ) -> Result<(), OperatorError> {
        let len = first.dimension();
        if len != second.dimension() {
            return Err(OperatorError::CrossoverFailed(format!(
                "parent lengths differ: {} vs {}",
                len,
                second.dimension()
            )));
        }
        if len < 2 {
            return Ok(());
        }

        let (start, end) = Self::cut_points(len, rng);
        first.genes_mut()[start..end].swap_with_slice(&mut second.genes_mut()[start..end]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::question_set::QuestionSet;
    use crate::question::QuestionId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn parents(len: usize) -> (QuestionSet, QuestionSet) {
        (
            QuestionSet::from_indices(0..len),
            QuestionSet::from_indices(100..100 + len),
        )
    }

    #[test]
    fn test_cut_points_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for len in 2..12 {
            for _ in 0..200 {
                let (i, j) = TwoPointCrossover::cut_points(len, &mut rng);
                assert!(i < j, "cut points {i} and {j} not ordered");
                assert!(j <= len);
            }
        }
    }

    #[test]
    fn test_crossover_exchanges_one_contiguous_segment() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let (mut a, mut b) = parents(8);
            TwoPointCrossover.crossover(&mut a, &mut b, &mut rng).unwrap();

            let swapped: Vec<usize> = (0..8).filter(|&k| a[k].0 >= 100).collect();
            assert!(!swapped.is_empty());
            assert!(swapped.windows(2).all(|w| w[1] == w[0] + 1));

            // Each position keeps its gene pair, only the owner changes
            for k in 0..8 {
                let mut pair = [a[k].0, b[k].0];
                pair.sort_unstable();
                assert_eq!(pair, [k, 100 + k]);
            }
        }
    }

    #[test]
    fn test_crossover_preserves_length() {
        let mut rng = StdRng::seed_from_u64(5);
        let (mut a, mut b) = parents(10);
        TwoPointCrossover.crossover(&mut a, &mut b, &mut rng).unwrap();
        assert_eq!(a.len(), 10);
        assert_eq!(b.len(), 10);
    }

    #[test]
    fn test_crossover_short_genomes_unchanged() {
        let mut rng = StdRng::seed_from_u64(5);
        let (mut a, mut b) = parents(1);
        TwoPointCrossover.crossover(&mut a, &mut b, &mut rng).unwrap();
        assert_eq!(a[0], QuestionId(0));
        assert_eq!(b[0], QuestionId(100));

        let mut empty_a = QuestionSet::new(Vec::new());
        let mut empty_b = QuestionSet::new(Vec::new());
        TwoPointCrossover
            .crossover(&mut empty_a, &mut empty_b, &mut rng)
            .unwrap();
        assert!(empty_a.is_empty());
    }

    #[test]
    fn test_crossover_short_genomes_draw_nothing() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut untouched = StdRng::seed_from_u64(8);
        let (mut a, mut b) = parents(1);
        TwoPointCrossover.crossover(&mut a, &mut b, &mut rng).unwrap();
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_crossover_length_mismatch() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut a = QuestionSet::from_indices(0..3);
        let mut b = QuestionSet::from_indices(0..4);
        assert!(matches!(
            TwoPointCrossover.crossover(&mut a, &mut b, &mut rng),
            Err(OperatorError::CrossoverFailed(_))
        ));
    }
}
