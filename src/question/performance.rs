//! Per-topic learner performance
//!
//! Scores start at 1 the first time a topic is seen, rise by one on a
//! correct answer and fall by one on a wrong answer, never below 1.
//! Higher scores make a topic's questions fitter.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Lowest score a topic can have
pub const MIN_SCORE: i64 = 1;

/// Mapping from topic to performance score
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceModel {
    scores: HashMap<String, i64>,
}

impl PerformanceModel {
    /// Create an empty model; every topic scores [`MIN_SCORE`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from explicit scores, clamping each to [`MIN_SCORE`]
    pub fn from_scores<I, S>(scores: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        Self {
            scores: scores
                .into_iter()
                .map(|(topic, score)| (topic.into(), score.max(MIN_SCORE)))
                .collect(),
        }
    }

    /// Score for a topic, defaulting to [`MIN_SCORE`] for unseen topics
    pub fn score(&self, topic: &str) -> i64 {
        self.scores.get(topic).copied().unwrap_or(MIN_SCORE)
    }

    /// Apply an answer outcome in place and return the topic's new score
    pub fn record_answer(&mut self, topic: &str, is_correct: bool) -> i64 {
        let score = self.scores.entry(topic.to_string()).or_insert(MIN_SCORE);
        *score = if is_correct {
            *score + 1
        } else {
            (*score - 1).max(MIN_SCORE)
        };
        *score
    }

    /// Pure variant of [`record_answer`](Self::record_answer)
    pub fn with_answer(&self, topic: &str, is_correct: bool) -> Self {
        let mut next = self.clone();
        next.record_answer(topic, is_correct);
        next
    }

    /// Topics that have been scored, sorted
    pub fn topics(&self) -> Vec<&str> {
        let mut topics: Vec<&str> = self.scores.keys().map(String::as_str).collect();
        topics.sort_unstable();
        topics
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.scores.iter().map(|(t, s)| (t.as_str(), *s))
    }
}

/// Session feedback entry point: the updated model after one answer.
///
/// The previous model is consumed; callers must use the returned one.
pub fn record_answer(mut model: PerformanceModel, topic: &str, is_correct: bool) -> PerformanceModel {
    model.record_answer(topic, is_correct);
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unseen_topic_defaults_to_one() {
        let model = PerformanceModel::new();
        assert_eq!(model.score("Verbs"), 1);
        assert!(model.is_empty());
    }

    #[test]
    fn test_correct_answer_increments() {
        let mut model = PerformanceModel::new();
        assert_eq!(model.record_answer("Verbs", true), 2);
        assert_eq!(model.record_answer("Verbs", true), 3);
        assert_eq!(model.score("Verbs"), 3);
    }

    #[test]
    fn test_wrong_answer_floors_at_one() {
        let mut model = PerformanceModel::from_scores([("Nouns", 2)]);
        assert_eq!(model.record_answer("Nouns", false), 1);
        assert_eq!(model.record_answer("Nouns", false), 1);
        assert_eq!(model.record_answer("Articles", false), 1);
        assert_eq!(model.len(), 2);
    }

    #[test]
    fn test_from_scores_clamps() {
        let model = PerformanceModel::from_scores([("Cases", -4), ("Tenses", 5)]);
        assert_eq!(model.score("Cases"), 1);
        assert_eq!(model.score("Tenses"), 5);
    }

    #[test]
    fn test_with_answer_leaves_original_untouched() {
        let model = PerformanceModel::from_scores([("Verbs", 2)]);
        let next = model.with_answer("Verbs", true);
        assert_eq!(model.score("Verbs"), 2);
        assert_eq!(next.score("Verbs"), 3);
    }

    #[test]
    fn test_record_answer_entry_point() {
        let model = record_answer(PerformanceModel::new(), "Nouns", true);
        let model = record_answer(model, "Verbs", false);
        assert_eq!(model.score("Nouns"), 2);
        assert_eq!(model.score("Verbs"), 1);
        assert_eq!(model.topics(), vec!["Nouns", "Verbs"]);
    }

    #[test]
    fn test_serde_is_plain_map() {
        let model = PerformanceModel::from_scores([("Verbs", 2)]);
        assert_eq!(serde_json::to_string(&model).unwrap(), r#"{"Verbs":2}"#);
        let back: PerformanceModel = serde_json::from_str(r#"{"Verbs":2}"#).unwrap();
        assert_eq!(back, model);
    }
}
