//! Question record
//!
//! Field names follow the question-bank JSON produced by the question
//! generators (`Question`, `Choices`, `CorrectAnswer`, `Topic`, `Difficulty`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Index of a question inside its pool
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub usize);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Question difficulty
///
/// Parsing is case-sensitive. Values other than `Easy`, `Medium` and `Hard`
/// are kept verbatim and weighted like `Easy`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unrecognized(String),
}

impl Difficulty {
    /// Multiplier applied to the topic weight during fitness evaluation
    pub fn weight(&self) -> i64 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
            Self::Unrecognized(_) => 1,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unrecognized(label) => label,
        }
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Easy" => Self::Easy,
            "Medium" => Self::Medium,
            "Hard" => Self::Hard,
            _ => Self::Unrecognized(label),
        }
    }
}

impl From<&str> for Difficulty {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Unrecognized(label) => label,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the source document a generated question came from
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceContext {
    #[serde(rename = "ChunkID")]
    pub chunk_id: serde_json::Value,
    #[serde(rename = "PageNumber")]
    pub page_number: serde_json::Value,
    #[serde(rename = "ContextPreview", default)]
    pub context_preview: String,
}

/// Immutable multiple-choice question
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "Question")]
    pub text: String,
    #[serde(rename = "Choices")]
    pub choices: Vec<String>,
    #[serde(rename = "CorrectAnswer")]
    pub correct_answer: String,
    #[serde(rename = "Topic")]
    pub topic: String,
    #[serde(rename = "Difficulty")]
    pub difficulty: Difficulty,
    #[serde(
        rename = "LearningObjective",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub learning_objective: Option<String>,
    #[serde(
        rename = "SourceContext",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_context: Option<SourceContext>,
}

impl Question {
    /// Create a question without generator metadata
    pub fn new(
        text: impl Into<String>,
        choices: Vec<String>,
        correct_answer: impl Into<String>,
        topic: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            text: text.into(),
            choices,
            correct_answer: correct_answer.into(),
            topic: topic.into(),
            difficulty,
            learning_objective: None,
            source_context: None,
        }
    }

    /// Attach a learning objective
    pub fn with_learning_objective(mut self, objective: impl Into<String>) -> Self {
        self.learning_objective = Some(objective.into());
        self
    }

    /// Zero-based position of the correct answer among the choices
    pub fn correct_choice_index(&self) -> Option<usize> {
        self.choices.iter().position(|c| *c == self.correct_answer)
    }

    /// Check whether a choice text is the correct answer
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Question {
        Question::new(
            "What is 'der Hund'?",
            vec!["cat".into(), "dog".into(), "house".into()],
            "dog",
            "Nouns",
            Difficulty::Easy,
        )
    }

    #[test]
    fn test_difficulty_weights() {
        assert_eq!(Difficulty::Easy.weight(), 1);
        assert_eq!(Difficulty::Medium.weight(), 2);
        assert_eq!(Difficulty::Hard.weight(), 3);
        assert_eq!(Difficulty::from("Expert").weight(), 1);
    }

    #[test]
    fn test_difficulty_parse_is_case_sensitive() {
        assert_eq!(Difficulty::from("Hard"), Difficulty::Hard);
        assert_eq!(
            Difficulty::from("hard"),
            Difficulty::Unrecognized("hard".to_string())
        );
    }

    #[test]
    fn test_difficulty_serde_keeps_unrecognized_label() {
        let d: Difficulty = serde_json::from_str("\"Tricky\"").unwrap();
        assert_eq!(d, Difficulty::Unrecognized("Tricky".to_string()));
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"Tricky\"");
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"Medium\"");
    }

    #[test]
    fn test_correct_choice_index() {
        let q = sample();
        assert_eq!(q.correct_choice_index(), Some(1));
        assert!(q.is_correct("dog"));
        assert!(!q.is_correct("cat"));
    }

    #[test]
    fn test_question_deserialize_bank_format() {
        let json = r#"{
            "Question": "Translate 'laufen'",
            "Choices": ["to run", "to walk", "to swim", "to fly"],
            "CorrectAnswer": "to run",
            "Difficulty": "Medium",
            "Topic": "Verbs",
            "LearningObjective": "Recognise common verbs",
            "SourceContext": {"ChunkID": 3, "PageNumber": 12, "ContextPreview": "Verben..."}
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.topic, "Verbs");
        assert_eq!(q.difficulty, Difficulty::Medium);
        assert_eq!(q.learning_objective.as_deref(), Some("Recognise common verbs"));
        let ctx = q.source_context.unwrap();
        assert_eq!(ctx.chunk_id, serde_json::json!(3));
        assert_eq!(ctx.context_preview, "Verben...");
    }

    #[test]
    fn test_question_serialize_omits_missing_metadata() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("LearningObjective").is_none());
        assert!(json.get("SourceContext").is_none());
        assert_eq!(json["CorrectAnswer"], "dog");
    }

    #[test]
    fn test_question_id_display() {
        assert_eq!(QuestionId(4).to_string(), "q4");
    }
}
