use rand::Rng;
use std::collections::HashSet;
use std::path::Path;

use quiz_core::model::{Question, QuestionDraft};

use crate::error::BankError;
use crate::sessions::plan;

/// Read-only catalog of questions a session is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already validated questions.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Empty` for an empty list and
    /// `BankError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(BankError::DuplicateId(question.id().clone()));
            }
        }
        Ok(Self { questions })
    }

    /// Validate a list of drafts into a bank.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Question` naming the first invalid draft, or any
    /// error from [`QuestionBank::new`].
    pub fn from_drafts(drafts: Vec<QuestionDraft>) -> Result<Self, BankError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| BankError::Question { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// Parse a JSON array of question drafts.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Json` for malformed JSON, or any validation error.
    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let drafts: Vec<QuestionDraft> = serde_json::from_str(json)?;
        Self::from_drafts(drafts)
    }

    /// Load a JSON bank from disk.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` if the file cannot be read, or any parse error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The ten web-basics questions shipped with the app.
    ///
    /// # Errors
    ///
    /// Returns `BankError` only if the built-in data fails validation.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json(BUILTIN_BANK)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Draw up to `count` distinct questions in random order.
    #[must_use]
    pub fn sample(&self, count: usize) -> Vec<Question> {
        plan::sample(&self.questions, count)
    }

    #[must_use]
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Question> {
        plan::sample_with(rng, &self.questions, count)
    }
}

const BUILTIN_BANK: &str = r##"[
  {
    "id": "q1",
    "text": "Which language runs in a web browser?",
    "choices": ["Java", "C", "Python", "JavaScript"],
    "answerIndex": 3,
    "explanation": "JavaScript is the native language of modern web browsers."
  },
  {
    "id": "q2",
    "text": "What does CSS stand for?",
    "choices": ["Computer Style Sheets", "Cascading Style Sheets", "Creative Style System", "Colorful Style Syntax"],
    "answerIndex": 1
  },
  {
    "id": "q3",
    "text": "Inside which HTML element do we put the JavaScript?",
    "choices": ["<javascript>", "<script>", "<js>", "<code>"],
    "answerIndex": 1
  },
  {
    "id": "q4",
    "text": "What keyword creates a constant in JavaScript?",
    "choices": ["var", "let", "const", "constant"],
    "answerIndex": 2
  },
  {
    "id": "q5",
    "text": "Which HTML attribute is used to define inline styles?",
    "choices": ["font", "style", "class", "styles"],
    "answerIndex": 1
  },
  {
    "id": "q6",
    "text": "Which of the following is NOT a JavaScript data type?",
    "choices": ["String", "Boolean", "Float", "Undefined"],
    "answerIndex": 2,
    "explanation": "JavaScript uses the Number type for both integers and floats."
  },
  {
    "id": "q7",
    "text": "Which method converts a JSON string to an object?",
    "choices": ["JSON.object()", "JSON.parse()", "JSON.stringify()", "JSON.toObject()"],
    "answerIndex": 1
  },
  {
    "id": "q8",
    "text": "Which CSS property controls text size?",
    "choices": ["font-weight", "text-style", "font-size", "text-size"],
    "answerIndex": 2
  },
  {
    "id": "q9",
    "text": "What does DOM stand for?",
    "choices": ["Document Object Model", "Display Object Management", "Digital Ordinance Model", "Desktop Oriented Mode"],
    "answerIndex": 0
  },
  {
    "id": "q10",
    "text": "Which symbol is used for comments in CSS?",
    "choices": ["// comment", "<!-- comment -->", "/* comment */", "# comment"],
    "answerIndex": 2
  }
]"##;
