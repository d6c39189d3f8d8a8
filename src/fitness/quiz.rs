//! Quiz fitness
//!
//! Rewards topic-weighted, difficulty-weighted questions and penalizes
//! topic repetition inside one question set.

use std::collections::HashSet;

use crate::fitness::traits::Fitness;
use crate::genome::question_set::QuestionSet;
use crate::question::{PerformanceModel, QuestionPool};

/// Flat penalty for every question whose topic already appeared earlier
/// in the same set. It does not grow with further repeats.
pub const REPEAT_TOPIC_PENALTY: i64 = 1;

/// Fitness of a question set under a learner's performance model
///
/// For each question in genome order the score gains
/// `performance[topic] * difficulty_weight`, and loses
/// [`REPEAT_TOPIC_PENALTY`] if its topic was already seen.
#[derive(Clone, Copy, Debug)]
pub struct QuizFitness<'a> {
    pool: &'a QuestionPool,
    performance: &'a PerformanceModel,
}

impl<'a> QuizFitness<'a> {
    pub fn new(pool: &'a QuestionPool, performance: &'a PerformanceModel) -> Self {
        Self { pool, performance }
    }

    pub fn pool(&self) -> &'a QuestionPool {
        self.pool
    }

    pub fn performance(&self) -> &'a PerformanceModel {
        self.performance
    }
}

impl Fitness for QuizFitness<'_> {
    type Genome = QuestionSet;
    type Value = i64;

    fn evaluate(&self, genome: &QuestionSet) -> i64 {
        let mut fitness = 0;
        let mut seen_topics = HashSet::new();

        for question in self.pool.resolve(genome) {
            let topic_weight = self.performance.score(&question.topic);
            fitness += topic_weight * question.difficulty.weight();

            if !seen_topics.insert(question.topic.as_str()) {
                fitness -= REPEAT_TOPIC_PENALTY;
            }
        }

        fitness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{Difficulty, Question};

    fn question(topic: &str, difficulty: &str) -> Question {
        Question::new(
            format!("{topic}/{difficulty}"),
            vec!["yes".into(), "no".into()],
            "yes",
            topic,
            Difficulty::from(difficulty),
        )
    }

    fn pool(questions: Vec<Question>) -> QuestionPool {
        QuestionPool::from_questions(questions).unwrap()
    }

    #[test]
    fn test_topic_times_difficulty() {
        let pool = pool(vec![question("Verbs", "Hard")]);
        let perf = PerformanceModel::from_scores([("Verbs", 2)]);
        let fitness = QuizFitness::new(&pool, &perf);

        assert_eq!(fitness.evaluate(&QuestionSet::from_indices([0])), 6);
    }

    #[test]
    fn test_repeated_topic_penalty() {
        let pool = pool(vec![question("Verbs", "Easy"), question("Verbs", "Easy")]);
        let perf = PerformanceModel::from_scores([("Verbs", 1)]);
        let fitness = QuizFitness::new(&pool, &perf);

        assert_eq!(fitness.evaluate(&QuestionSet::from_indices([0, 1])), 1);
    }

    #[test]
    fn test_penalty_is_linear_per_repeat() {
        let pool = pool(vec![question("Verbs", "Medium")]);
        let perf = PerformanceModel::new();
        let fitness = QuizFitness::new(&pool, &perf);

        // 4 * (1 * 2) minus one for each of the three repeats
        assert_eq!(fitness.evaluate(&QuestionSet::from_indices([0, 0, 0, 0])), 5);
    }

    #[test]
    fn test_unseen_topic_weighs_one() {
        let pool = pool(vec![question("Cases", "Medium")]);
        let perf = PerformanceModel::from_scores([("Verbs", 9)]);
        let fitness = QuizFitness::new(&pool, &perf);

        assert_eq!(fitness.evaluate(&QuestionSet::from_indices([0])), 2);
    }

    #[test]
    fn test_unrecognized_difficulty_weighs_one() {
        let pool = pool(vec![question("Verbs", "Legendary")]);
        let perf = PerformanceModel::from_scores([("Verbs", 4)]);
        let fitness = QuizFitness::new(&pool, &perf);

        assert_eq!(fitness.evaluate(&QuestionSet::from_indices([0])), 4);
    }

    #[test]
    fn test_distinct_topics_have_no_penalty() {
        let pool = pool(vec![question("Verbs", "Easy"), question("Nouns", "Hard")]);
        let perf = PerformanceModel::from_scores([("Nouns", 5)]);
        let fitness = QuizFitness::new(&pool, &perf);

        assert_eq!(fitness.evaluate(&QuestionSet::from_indices([0, 1])), 1 + 15);
        assert_eq!(fitness.evaluate(&QuestionSet::from_indices([1, 0])), 15 + 1);
    }

    #[test]
    fn test_empty_set_scores_zero() {
        let pool = pool(vec![question("Verbs", "Easy")]);
        let perf = PerformanceModel::new();
        let fitness = QuizFitness::new(&pool, &perf);

        assert_eq!(fitness.evaluate(&QuestionSet::new(Vec::new())), 0);
    }
}
