//! Adaptive German Vocabulary Quiz
//!
//! This example runs an interactive quiz on the terminal. Every question
//! is picked by a fresh genetic search weighted by how well you have done
//! on each topic so far.
//!
//! Usage:
//!
//! ```text
//! cargo run --example adaptive_quiz -- [questions.json] [session.json]
//! RUST_LOG=quiz_evo=debug cargo run --example adaptive_quiz
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use quiz_evo::prelude::*;
use tracing_subscriber::EnvFilter;

/// Reads answers from stdin and prints questions and feedback to stdout
struct TerminalAnswers<R: BufRead> {
    input: R,
}

impl<R: BufRead> AnswerProvider for TerminalAnswers<R> {
    fn answer(&mut self, number: usize, question: &Question) -> String {
        println!("\nQuestion {}: {}", number, question.text);
        for (idx, choice) in question.choices.iter().enumerate() {
            println!("{}. {}", idx + 1, choice);
        }
        print!("Your answer (1-{}): ", question.choices.len());
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => line,
            Err(_) => String::new(),
        }
    }

    fn feedback(&mut self, _question: &Question, outcome: &AnswerOutcome) {
        match outcome {
            AnswerOutcome::Correct => println!("Correct!"),
            AnswerOutcome::Incorrect { correct_answer } => {
                println!("Wrong! The correct answer was: {}", correct_answer)
            }
            AnswerOutcome::Invalid(err) => {
                println!("Invalid choice ({}). Moving to the next question.", err)
            }
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quiz_evo=warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let questions_path = args.next().map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/data/german_vocabulary.json")
    });
    let config = match args.next() {
        Some(path) => SessionConfig::from_json_file(path)?,
        None => SessionConfig::default(),
    };

    let pool = QuestionPool::from_json_file(&questions_path)?;
    println!("=== Adaptive German Vocabulary Quiz ===");
    println!(
        "{} questions across topics: {}",
        pool.len(),
        pool.topics().join(", ")
    );

    let mut session = QuizSession::from_config(&pool, config)?;
    let stdin = io::stdin();
    let mut provider = TerminalAnswers {
        input: stdin.lock(),
    };

    let summary = session.run(&mut provider)?;

    println!("\nQuiz completed! {}", summary);
    for (topic, tally) in &summary.topics {
        println!(
            "  {:<12} asked {:>2}, correct {:>2}, score {}",
            topic,
            tally.asked,
            tally.correct,
            summary.performance.score(topic)
        );
    }

    Ok(())
}
