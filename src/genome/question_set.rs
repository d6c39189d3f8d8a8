//! Question-set genome
//!
//! An ordered, fixed-length sequence of references into a question pool.
//! The same question may appear more than once.

use std::ops::Index;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::bounds::GenomeBounds;
use crate::genome::traits::EvolutionaryGenome;
use crate::question::QuestionId;

/// Ordered selection of pool questions
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionSet {
    questions: Vec<QuestionId>,
}

impl QuestionSet {
    /// Create a new question set from question ids
    pub fn new(questions: Vec<QuestionId>) -> Self {
        Self { questions }
    }

    /// Create from raw pool indices
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            questions: indices.into_iter().map(QuestionId).collect(),
        }
    }

    /// Number of questions in the set
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate over the question ids in order
    pub fn iter(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().copied()
    }

    /// First question of the set, the pick for single-question selection
    pub fn first(&self) -> Option<QuestionId> {
        self.questions.first().copied()
    }
}

impl EvolutionaryGenome for QuestionSet {
    type Allele = QuestionId;

    fn genes(&self) -> &[QuestionId] {
        &self.questions
    }

    fn genes_mut(&mut self) -> &mut [QuestionId] {
        &mut self.questions
    }

    fn generate<R: Rng>(rng: &mut R, bounds: &GenomeBounds) -> Self {
        let questions = (0..bounds.length)
            .map(|_| QuestionId(rng.gen_range(0..bounds.num_alleles)))
            .collect();
        Self { questions }
    }

    /// Hamming distance over positions, plus the length difference
    fn distance(&self, other: &Self) -> f64 {
        let differing = self
            .questions
            .iter()
            .zip(other.questions.iter())
            .filter(|(a, b)| a != b)
            .count();
        let extra = self.questions.len().abs_diff(other.questions.len());
        (differing + extra) as f64
    }
}

impl Index<usize> for QuestionSet {
    type Output = QuestionId;

    fn index(&self, index: usize) -> &Self::Output {
        &self.questions[index]
    }
}
