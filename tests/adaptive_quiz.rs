//! End-to-end tests for adaptive question selection and quiz sessions

use std::io::Write;
use std::path::PathBuf;

use quiz_evo::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn question(text: &str, topic: &str, difficulty: Difficulty) -> Question {
    Question::new(
        text,
        vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "d".to_string(),
        ],
        "c",
        topic,
        difficulty,
    )
}

fn nouns_and_verbs() -> QuestionPool {
    QuestionPool::from_questions(vec![
        question("der Tisch", "Nouns", Difficulty::Easy),
        question("laufen", "Verbs", Difficulty::Hard),
        question("die Blume", "Nouns", Difficulty::Medium),
        question("essen", "Verbs", Difficulty::Medium),
        question("trinken", "Verbs", Difficulty::Easy),
    ])
    .unwrap()
}

fn demo_bank() -> QuestionPool {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/data/german_vocabulary.json");
    QuestionPool::from_json_file(path).unwrap()
}

struct AlwaysCorrect;

impl AnswerProvider for AlwaysCorrect {
    fn answer(&mut self, _number: usize, question: &Question) -> String {
        let index = question.correct_choice_index().unwrap();
        (index + 1).to_string()
    }
}

#[test]
fn strong_topic_is_selected() {
    let pool = nouns_and_verbs();
    let performance = PerformanceModel::from_scores([("Nouns", 5), ("Verbs", 1)]);

    let nouns = (0..100)
        .filter(|&seed| {
            let best =
                select_individual(&pool, &performance, 1, 10, 10, &mut StdRng::seed_from_u64(seed))
                    .unwrap();
            let id = best.genome().first().unwrap();
            pool[id].topic == "Nouns"
        })
        .count();

    assert!(nouns >= 95, "Nouns picked in only {nouns} of 100 runs");
}

#[test]
fn single_question_fitness_examples() {
    let pool = QuestionPool::from_questions(vec![
        question("sein", "Verbs", Difficulty::Hard),
        question("haben", "Verbs", Difficulty::Easy),
        question("werden", "Verbs", Difficulty::Easy),
    ])
    .unwrap();

    let fitness_for = |scores: PerformanceModel, genome: QuestionSet| {
        QuizFitness::new(&pool, &scores).evaluate(&genome)
    };

    assert_eq!(
        fitness_for(
            PerformanceModel::from_scores([("Verbs", 2)]),
            QuestionSet::from_indices([0])
        ),
        6
    );
    assert_eq!(
        fitness_for(
            PerformanceModel::from_scores([("Verbs", 1)]),
            QuestionSet::from_indices([1, 2])
        ),
        1
    );
}

#[test]
fn configuration_errors_fail_fast() {
    let empty = QuestionPool::from_questions(Vec::new()).unwrap();
    let pool = nouns_and_verbs();
    let performance = PerformanceModel::new();
    let mut rng = StdRng::seed_from_u64(0);

    assert!(matches!(
        select_individual(&empty, &performance, 1, 10, 10, &mut rng),
        Err(EvolutionError::Configuration(_))
    ));
    assert!(matches!(
        select_individual(&pool, &performance, 0, 10, 10, &mut rng),
        Err(EvolutionError::Configuration(_))
    ));
    assert!(matches!(
        select_quiz(&empty, &performance, &QuizGAConfig::default(), &mut rng),
        Err(EvolutionError::Configuration(_))
    ));
}

#[test]
fn whole_quiz_from_demo_bank() {
    let pool = demo_bank();
    let performance = PerformanceModel::from_scores([("Cases", 4)]);
    let config = QuizGAConfig::default();

    let quiz = select_quiz(&pool, &performance, &config, &mut StdRng::seed_from_u64(21)).unwrap();
    assert_eq!(quiz.len(), 10);

    let single =
        select_question(&pool, &performance, &config, &mut StdRng::seed_from_u64(21)).unwrap();
    assert_eq!(single.topic, "Cases");
}

#[test]
fn all_correct_session() {
    let pool = demo_bank();
    let config = SessionConfig::default()
        .with_total_questions(10)
        .with_seed(1234);
    let mut session = QuizSession::from_config(&pool, config).unwrap();

    let mut previous = session.performance().clone();
    for _ in 0..10 {
        let question = session.ask_next().unwrap();
        let answer = (question.correct_choice_index().unwrap() + 1).to_string();
        assert_eq!(session.submit_answer(&answer).unwrap(), AnswerOutcome::Correct);

        let current = session.performance().clone();
        for topic in pool.topics() {
            assert!(current.score(topic) >= previous.score(topic));
        }
        previous = current;
    }

    let summary = session.summary();
    assert!(session.is_complete());
    assert_eq!(summary.correct, 10);
    assert_eq!(summary.incorrect + summary.invalid, 0);
    assert_eq!(
        summary.performance.iter().map(|(_, s)| s - 1).sum::<i64>(),
        10
    );
}

#[test]
fn session_run_through_provider() {
    let pool = demo_bank();
    let config = SessionConfig::default().with_total_questions(5).with_seed(7);
    let mut session = QuizSession::from_config(&pool, config).unwrap();

    let summary = session.run(&mut AlwaysCorrect).unwrap();

    assert_eq!(summary.asked, 5);
    assert_eq!(summary.correct, 5);
    assert!(session
        .history()
        .windows(2)
        .filter(|w| w[0].topic == w[1].topic)
        .all(|w| w[1].score_after > w[0].score_after));
}

#[test]
fn question_bank_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"Question": "Was ist das?", "Choices": ["ein Hund", "eine Katze"],
              "CorrectAnswer": "ein Hund", "Topic": "Nouns", "Difficulty": "Easy"}},
            {{"Question": "Wie heißt du?", "Choices": ["Ich heiße Anna", "Danke"],
              "CorrectAnswer": "Ich heiße Anna", "Topic": "Phrases", "Difficulty": "Tricky"}}
        ]"#
    )
    .unwrap();

    let pool = QuestionPool::from_json_file(file.path()).unwrap();
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.topics(), vec!["Nouns", "Phrases"]);
    assert_eq!(pool[QuestionId(1)].difficulty.weight(), 1);

    let session_config = SessionConfig::default().with_total_questions(2).with_seed(3);
    let mut session = QuizSession::from_config(&pool, session_config).unwrap();
    let summary = session.run(&mut AlwaysCorrect).unwrap();
    assert_eq!(summary.correct, 2);
}
