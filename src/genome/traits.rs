//! Core genome traits
//!
//! This module defines the `EvolutionaryGenome` trait shared by every
//! operator and by the population container.

use rand::Rng;
use serde::{de::DeserializeOwned, Serialize};

use crate::genome::bounds::GenomeBounds;

/// Core genome abstraction for evolutionary algorithms.
///
/// A genome is a fixed-length ordered sequence of alleles. Operators work
/// on the gene slice directly, so any genome exposing its genes can be
/// crossed over and mutated by the built-in operators.
/// Genomes must be cloneable, serializable, and thread-safe.
pub trait EvolutionaryGenome: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The allele type for individual genes
    type Allele: Clone + Send + Sync;

    /// Get the genes as a slice
    fn genes(&self) -> &[Self::Allele];

    /// Get the genes as a mutable slice
    fn genes_mut(&mut self) -> &mut [Self::Allele];

    /// Generate a random genome, each gene drawn independently and
    /// uniformly (with replacement) from the bounds' alphabet
    fn generate<R: Rng>(rng: &mut R, bounds: &GenomeBounds) -> Self;

    /// Number of genes
    fn dimension(&self) -> usize {
        self.genes().len()
    }

    /// Distance metric between two genomes (default: 0.0)
    fn distance(&self, _other: &Self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    // Mock genome for testing the trait defaults
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct MockGenome {
        genes: Vec<u8>,
    }

    impl EvolutionaryGenome for MockGenome {
        type Allele = u8;

        fn genes(&self) -> &[u8] {
            &self.genes
        }

        fn genes_mut(&mut self) -> &mut [u8] {
            &mut self.genes
        }

        fn generate<R: Rng>(rng: &mut R, bounds: &GenomeBounds) -> Self {
            let genes = (0..bounds.length)
                .map(|_| rng.gen_range(0..bounds.num_alleles) as u8)
                .collect();
            Self { genes }
        }
    }

    #[test]
    fn test_mock_genome_dimension() {
        let genome = MockGenome { genes: vec![1, 2, 3] };
        assert_eq!(genome.dimension(), 3);
    }

    #[test]
    fn test_mock_genome_generate() {
        let mut rng = rand::thread_rng();
        let bounds = GenomeBounds::new(4, 6).unwrap();
        let genome = MockGenome::generate(&mut rng, &bounds);
        assert_eq!(genome.dimension(), 6);
        assert!(genome.genes().iter().all(|&g| g < 4));
    }

    #[test]
    fn test_default_distance() {
        let g1 = MockGenome { genes: vec![0, 0] };
        let g2 = MockGenome { genes: vec![1, 1] };
        assert_eq!(g1.distance(&g2), 0.0);
    }
}
