//! Question store
//!
//! Loads the question file once at startup. The file is CSV with a header row
//! and the columns `question, optionA, optionB, optionC, correctOption`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::models::question::{Question, RawQuestion};
use crate::{QuizError, Result};

/// Ordered, immutable set of questions for one session
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Build a store from already-validated questions
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionSet);
        }
        Ok(Self { questions })
    }

    /// Load questions from a CSV file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let store = Self::from_reader(file)?;
        tracing::info!(path = %path.display(), count = store.len(), "loaded questions");
        Ok(store)
    }

    /// Load questions from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut questions = Vec::new();
        for (i, record) in csv_reader.deserialize::<RawQuestion>().enumerate() {
            let raw = record?;
            questions.push(raw.into_question(i + 1)?);
        }

        Self::new(questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
