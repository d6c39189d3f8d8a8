//! Question pool
//!
//! Read-only collection of candidate questions loaded from an external
//! question bank. Genomes refer to pool entries by [`QuestionId`].

use std::collections::HashSet;
use std::fs;
use std::ops::Index;
use std::path::Path;

use crate::error::{EvolutionError, QuestionBankError};
use crate::genome::bounds::GenomeBounds;
use crate::genome::question_set::QuestionSet;
use crate::question::question::{Question, QuestionId};

/// Immutable, ordered pool of questions
#[derive(Clone, Debug, Default)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    /// Build a pool from already-parsed questions, validating each one
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        for (index, question) in questions.iter().enumerate() {
            validate(index, question)?;
        }
        Ok(Self { questions })
    }

    /// Parse a JSON array of questions
    pub fn from_json_str(json: &str) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::from_questions(questions)
    }

    /// Load a JSON question bank from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, QuestionBankError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Like [`QuestionPool::get`], but a missing id is an error
    pub fn lookup(&self, id: QuestionId) -> Result<&Question, EvolutionError> {
        self.get(id).ok_or(EvolutionError::UnknownQuestion(id.0))
    }

    /// Resolve every id of a question set to its question, in order,
    /// skipping ids outside the pool
    ///
    /// The questions borrow from the pool only, so they outlive `set`.
    pub fn resolve<'a, 's>(
        &'a self,
        set: &'s QuestionSet,
    ) -> impl Iterator<Item = &'a Question> + 's
    where
        'a: 's,
    {
        set.iter().filter_map(move |id| self.get(id))
    }

    /// Distinct topics in first-seen order
    pub fn topics(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .map(|q| q.topic.as_str())
            .filter(|topic| seen.insert(*topic))
            .collect()
    }

    /// Genome bounds for selecting `num_questions` questions from this pool
    pub fn bounds(&self, num_questions: usize) -> Result<GenomeBounds, EvolutionError> {
        GenomeBounds::new(self.questions.len(), num_questions)
    }
}

impl Index<QuestionId> for QuestionPool {
    type Output = Question;

    fn index(&self, id: QuestionId) -> &Self::Output {
        &self.questions[id.0]
    }
}

fn validate(index: usize, question: &Question) -> Result<(), QuestionBankError> {
    let invalid = |reason: &str| QuestionBankError::InvalidQuestion {
        index,
        reason: reason.to_string(),
    };

    if question.topic.trim().is_empty() {
        return Err(invalid("topic is empty"));
    }
    if question.choices.is_empty() {
        return Err(invalid("question has no choices"));
    }
    if question.correct_choice_index().is_none() {
        return Err(QuestionBankError::InvalidQuestion {
            index,
            reason: format!(
                "correct answer {:?} is not one of the choices",
                question.correct_answer
            ),
        });
    }
    Ok(())
}
