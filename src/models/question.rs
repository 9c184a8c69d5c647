//! Question records
//!
//! A [`Question`] is immutable once built. Rows read from the question file
//! arrive as [`RawQuestion`] and are validated on conversion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{QuizError, Result};

/// Answer choice identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
}

impl OptionLabel {
    /// All labels in display order
    pub const ALL: [OptionLabel; 3] = [OptionLabel::A, OptionLabel::B, OptionLabel::C];

    /// Display row of this label (0 for A)
    pub fn index(self) -> usize {
        match self {
            OptionLabel::A => 0,
            OptionLabel::B => 1,
            OptionLabel::C => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionLabel::A => "A",
            OptionLabel::B => "B",
            OptionLabel::C => "C",
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(OptionLabel::A),
            "B" => Ok(OptionLabel::B),
            "C" => Ok(OptionLabel::C),
            other => Err(format!("correctOption '{}' is not one of A, B, C", other)),
        }
    }
}

/// One quiz item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: [String; 3],
    correct: OptionLabel,
}

impl Question {
    /// Build a question, rejecting empty text
    pub fn new(
        prompt: impl Into<String>,
        options: [String; 3],
        correct: OptionLabel,
    ) -> std::result::Result<Self, String> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err("question text is empty".to_string());
        }
        for label in OptionLabel::ALL {
            if options[label.index()].trim().is_empty() {
                return Err(format!("option{} is empty", label));
            }
        }
        Ok(Self {
            prompt,
            options,
            correct,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Text of the given option
    pub fn option(&self, label: OptionLabel) -> &str {
        &self.options[label.index()]
    }

    /// Options in display order
    pub fn options(&self) -> impl Iterator<Item = (OptionLabel, &str)> {
        OptionLabel::ALL
            .into_iter()
            .map(move |label| (label, self.option(label)))
    }

    pub fn correct(&self) -> OptionLabel {
        self.correct
    }

    pub fn is_correct(&self, label: OptionLabel) -> bool {
        self.correct == label
    }
}

/// One row of the question file, as written on disk
#[derive(Debug, Clone, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    #[serde(rename = "optionA")]
    pub option_a: String,
    #[serde(rename = "optionB")]
    pub option_b: String,
    #[serde(rename = "optionC")]
    pub option_c: String,
    #[serde(rename = "correctOption")]
    pub correct_option: String,
}

impl RawQuestion {
    /// Validate the row; `row` is the 1-based data row used in error messages
    pub fn into_question(self, row: usize) -> Result<Question> {
        let invalid = |reason: String| QuizError::InvalidQuestion { row, reason };

        let correct = self.correct_option.parse::<OptionLabel>().map_err(invalid)?;
        Question::new(
            self.question,
            [self.option_a, self.option_b, self.option_c],
            correct,
        )
        .map_err(invalid)
    }
}
