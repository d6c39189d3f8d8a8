//! Bounds for index genomes
//!
//! Index genomes draw every gene from a finite alphabet `0..num_alleles`
//! and have a fixed length for the duration of a run.

use serde::{Deserialize, Serialize};

use crate::error::EvolutionError;

/// Shape of the search space for an index genome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenomeBounds {
    /// Number of distinct alleles a gene may take (the pool size)
    pub num_alleles: usize,
    /// Number of genes per genome
    pub length: usize,
}

impl GenomeBounds {
    /// Create new bounds, rejecting an empty alphabet or a zero length
    pub fn new(num_alleles: usize, length: usize) -> Result<Self, EvolutionError> {
        if num_alleles == 0 {
            return Err(EvolutionError::Configuration(
                "question pool is empty".to_string(),
            ));
        }
        if length == 0 {
            return Err(EvolutionError::Configuration(
                "number of questions must be positive".to_string(),
            ));
        }
        Ok(Self {
            num_alleles,
            length,
        })
    }

    /// Check if an allele index lies inside the alphabet
    pub fn contains(&self, allele: usize) -> bool {
        allele < self.num_alleles
    }
}
