//! Session configuration

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithms::quiz_ga::QuizGAConfig;
use crate::error::SessionError;

/// Settings for one adaptive quiz session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of questions asked before the session ends
    pub total_questions: usize,
    /// Engine settings for each per-question search
    ///
    /// `num_questions` is ignored; every search selects one question.
    pub engine: QuizGAConfig,
    /// Seed for the session's random source; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            total_questions: 10,
            engine: QuizGAConfig::default().with_num_questions(1),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Set the number of questions to ask
    pub fn with_total_questions(mut self, total: usize) -> Self {
        self.total_questions = total;
        self
    }

    /// Set the engine settings
    pub fn with_engine(mut self, engine: QuizGAConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Fix the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Engine settings for a single-question search
    pub fn engine_config(&self) -> QuizGAConfig {
        self.engine.clone().with_num_questions(1)
    }

    /// Check the configuration before the first question is asked
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.total_questions == 0 {
            return Err(SessionError::InvalidConfiguration(
                "total questions must be positive".to_string(),
            ));
        }
        self.engine_config().validate()?;
        Ok(())
    }

    /// Parse a JSON configuration; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, SessionError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration from disk
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
