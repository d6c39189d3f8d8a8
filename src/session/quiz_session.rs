//! Adaptive quiz session driver
//!
//! The session alternates between two states: idle (ready to evolve the
//! next question) and waiting for an answer to the pending question.
//! Performance is only updated between searches, never during one.

use std::collections::BTreeMap;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::algorithms::quiz_ga::StandardQuizGA;
use crate::error::{AnswerParseError, EvolutionError, SessionError};
use crate::question::{PerformanceModel, Question, QuestionId, QuestionPool};
use crate::session::config::SessionConfig;

/// Source of learner answers, implemented by the interactive front end
pub trait AnswerProvider {
    /// Raw answer text for question `number` (1-based)
    fn answer(&mut self, number: usize, question: &Question) -> String;

    /// Called once the answer has been scored
    fn feedback(&mut self, _question: &Question, _outcome: &AnswerOutcome) {}
}

/// How an answer was scored
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect { correct_answer: String },
    /// Input did not name a choice; performance is left unchanged
    Invalid(AnswerParseError),
}

impl AnswerOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Whether the outcome updated the performance model
    pub fn is_scored(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }
}

/// One entry of the session history
#[derive(Clone, Debug, PartialEq)]
pub struct AskedQuestion {
    /// Position in the session (1-based)
    pub number: usize,
    pub question: QuestionId,
    pub topic: String,
    pub outcome: AnswerOutcome,
    /// Topic score after the answer was applied
    pub score_after: i64,
}

/// Per-topic answer counts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicTally {
    pub asked: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub invalid: usize,
}

/// Outcome of a finished (or interrupted) session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_questions: usize,
    pub asked: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub invalid: usize,
    pub topics: BTreeMap<String, TopicTally>,
    pub performance: PerformanceModel,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You answered {} correctly out of {}.",
            self.correct, self.total_questions
        )
    }
}

/// Parse a 1-based choice number into a 0-based choice index
pub fn parse_choice(input: &str, available: usize) -> Result<usize, AnswerParseError> {
    let trimmed = input.trim();
    let choice: usize = trimmed
        .parse()
        .map_err(|_| AnswerParseError::NotANumber(trimmed.to_string()))?;

    if choice == 0 || choice > available {
        return Err(AnswerParseError::OutOfRange { choice, available });
    }
    Ok(choice - 1)
}

/// Adaptive quiz session over a fixed question pool
pub struct QuizSession<'p, R: Rng> {
    pool: &'p QuestionPool,
    config: SessionConfig,
    performance: PerformanceModel,
    rng: R,
    pending: Option<QuestionId>,
    history: Vec<AskedQuestion>,
}

impl<'p> QuizSession<'p, StdRng> {
    /// Create a session seeded from `config.seed`, or from entropy if unset
    pub fn from_config(pool: &'p QuestionPool, config: SessionConfig) -> Result<Self, SessionError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(pool, config, rng)
    }
}

impl<'p, R: Rng> QuizSession<'p, R> {
    /// Create a session with an empty performance model
    ///
    /// Fails before any question is asked if the pool is empty or the
    /// configuration is unusable.
    pub fn new(pool: &'p QuestionPool, config: SessionConfig, rng: R) -> Result<Self, SessionError> {
        config.validate()?;
        pool.bounds(1)?;

        Ok(Self {
            pool,
            config,
            performance: PerformanceModel::new(),
            rng,
            pending: None,
            history: Vec::new(),
        })
    }

    /// Start from previously acquired performance scores
    pub fn with_performance(mut self, performance: PerformanceModel) -> Self {
        self.performance = performance;
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn performance(&self) -> &PerformanceModel {
        &self.performance
    }

    pub fn into_performance(self) -> PerformanceModel {
        self.performance
    }

    pub fn history(&self) -> &[AskedQuestion] {
        &self.history
    }

    /// The question waiting for an answer, if any
    pub fn pending_question(&self) -> Option<&'p Question> {
        self.pending.and_then(|id| self.pool.get(id))
    }

    /// Number of questions asked so far, including a pending one
    pub fn asked(&self) -> usize {
        self.history.len() + usize::from(self.pending.is_some())
    }

    /// Whether every configured question has been asked and answered
    pub fn is_complete(&self) -> bool {
        self.pending.is_none() && self.history.len() >= self.config.total_questions
    }

    /// Evolve and return the next question
    ///
    /// Returns the pending question again if it has not been answered yet.
    pub fn ask_next(&mut self) -> Result<&'p Question, SessionError> {
        if let Some(question) = self.pending_question() {
            return Ok(question);
        }
        if self.history.len() >= self.config.total_questions {
            return Err(SessionError::SessionComplete(self.config.total_questions));
        }

        let engine =
            StandardQuizGA::for_pool(self.pool, &self.performance, self.config.engine_config())?;
        let result = engine.run(&mut self.rng)?;
        let id = result
            .best_genome()
            .first()
            .ok_or(EvolutionError::EmptyPopulation)?;
        let question = self.pool.lookup(id)?;

        self.pending = Some(id);
        info!(
            number = self.asked(),
            question = %id,
            topic = %question.topic,
            difficulty = %question.difficulty,
            fitness = ?result.best_fitness(),
            "question asked"
        );
        Ok(question)
    }

    /// Score raw learner input against the pending question
    ///
    /// Unparsable or out-of-range input is recorded as asked but leaves
    /// the performance model unchanged.
    pub fn submit_answer(&mut self, input: &str) -> Result<AnswerOutcome, SessionError> {
        let question = self.pending_question().ok_or(SessionError::NoPendingQuestion)?;

        let outcome = match parse_choice(input, question.choices.len()) {
            Ok(index) if question.is_correct(&question.choices[index]) => AnswerOutcome::Correct,
            Ok(_) => AnswerOutcome::Incorrect {
                correct_answer: question.correct_answer.clone(),
            },
            Err(err) => AnswerOutcome::Invalid(err),
        };
        self.resolve_pending(outcome)
    }

    /// Score the pending question with an already graded result
    pub fn record_answer(&mut self, is_correct: bool) -> Result<AnswerOutcome, SessionError> {
        let question = self.pending_question().ok_or(SessionError::NoPendingQuestion)?;

        let outcome = if is_correct {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect {
                correct_answer: question.correct_answer.clone(),
            }
        };
        self.resolve_pending(outcome)
    }

    fn resolve_pending(&mut self, outcome: AnswerOutcome) -> Result<AnswerOutcome, SessionError> {
        let id = self.pending.take().ok_or(SessionError::NoPendingQuestion)?;
        let topic = self.pool[id].topic.clone();

        let score_after = if outcome.is_scored() {
            let score = self.performance.record_answer(&topic, outcome.is_correct());
            debug!(topic = %topic, score, correct = outcome.is_correct(), "performance updated");
            score
        } else {
            debug!(topic = %topic, ?outcome, "answer not scored");
            self.performance.score(&topic)
        };

        self.history.push(AskedQuestion {
            number: self.history.len() + 1,
            question: id,
            topic,
            outcome: outcome.clone(),
            score_after,
        });
        Ok(outcome)
    }

    /// Drive the remaining questions through `provider`
    pub fn run<P>(&mut self, provider: &mut P) -> Result<SessionSummary, SessionError>
    where
        P: AnswerProvider + ?Sized,
    {
        while !self.is_complete() {
            let question = self.ask_next()?;
            let input = provider.answer(self.asked(), question);
            let outcome = self.submit_answer(&input)?;
            provider.feedback(question, &outcome);
        }

        let summary = self.summary();
        info!(
            correct = summary.correct,
            incorrect = summary.incorrect,
            invalid = summary.invalid,
            "session finished"
        );
        Ok(summary)
    }

    /// Summary of the answered questions so far
    pub fn summary(&self) -> SessionSummary {
        let mut summary = SessionSummary {
            total_questions: self.config.total_questions,
            asked: self.asked(),
            correct: 0,
            incorrect: 0,
            invalid: 0,
            topics: BTreeMap::new(),
            performance: self.performance.clone(),
        };

        for entry in &self.history {
            let tally = summary.topics.entry(entry.topic.clone()).or_default();
            tally.asked += 1;
            match entry.outcome {
                AnswerOutcome::Correct => {
                    summary.correct += 1;
                    tally.correct += 1;
                }
                AnswerOutcome::Incorrect { .. } => {
                    summary.incorrect += 1;
                    tally.incorrect += 1;
                }
                AnswerOutcome::Invalid(_) => {
                    summary.invalid += 1;
                    tally.invalid += 1;
                }
            }
        }
        summary
    }
}
