use std::io::Write;

use quizfx::error;
use quizfx::models::{OptionLabel, QuestionStore};
use quizfx::QuizError;
use tempfile::{NamedTempFile, TempDir};

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_from_disk() {
    let file = csv_file(
        "question,optionA,optionB,optionC,correctOption\n\
         \"2 + 2?\",3,4,5,B\n\
         Capital of France?,Paris,Rome,Oslo,a\n",
    );
    let store = QuestionStore::load(file.path()).unwrap();
    assert_eq!(store.len(), 2);
    let prompts: Vec<&str> = store.iter().map(|q| q.prompt()).collect();
    assert_eq!(prompts, vec!["2 + 2?", "Capital of France?"]);

    let first = store.get(0).unwrap();
    assert_eq!(first.prompt(), "2 + 2?");
    assert_eq!(first.correct(), OptionLabel::B);
    assert_eq!(store.get(1).unwrap().correct(), OptionLabel::A);
}

#[test]
fn test_missing_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let err = QuestionStore::load(&temp_dir.path().join("nope.csv")).unwrap_err();
    match &err {
        QuizError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected Io error, got {:?}", other),
    }
    assert!(error::user_friendly_message(&err).contains("not found"));
}

#[test]
fn test_header_only_file_is_empty_set() {
    let file = csv_file("question,optionA,optionB,optionC,correctOption\n");
    let err = QuestionStore::load(file.path()).unwrap_err();
    assert!(matches!(err, QuizError::EmptyQuestionSet));
}

#[test]
fn test_bad_answer_names_the_row() {
    let file = csv_file(
        "question,optionA,optionB,optionC,correctOption\n\
         One?,a,b,c,A\n\
         Two?,a,b,c,D\n",
    );
    let err = QuestionStore::load(file.path()).unwrap_err();
    match &err {
        QuizError::InvalidQuestion { row, .. } => assert_eq!(*row, 2),
        other => panic!("expected InvalidQuestion, got {:?}", other),
    }
    assert!(error::user_friendly_message(&err).contains("Question 2"));
}
