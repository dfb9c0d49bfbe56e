use quiz_core::model::{AnswerRecord, Percent, SessionReport};

/// Percentage at or above which the result screen celebrates.
pub const CELEBRATION_THRESHOLD: u8 = 60;

/// Closing remark tier for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remark {
    Perfect,
    Excellent,
    Good,
    Encouragement,
}

impl Remark {
    /// Highest matching tier wins: 100, then ≥ 80, then ≥ 60.
    #[must_use]
    pub fn for_percent(percent: Percent) -> Self {
        match percent.value() {
            100.. => Self::Perfect,
            80..=99 => Self::Excellent,
            60..=79 => Self::Good,
            _ => Self::Encouragement,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect score! You're unstoppable.",
            Self::Excellent => "Excellent work!",
            Self::Good => "Good job! Almost there.",
            Self::Encouragement => "Nice try! Keep practicing.",
        }
    }
}

/// One row of the post-session review list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    /// One-based position in presentation order.
    pub number: usize,
    pub question_text: String,
    pub is_correct: bool,
    pub selected_text: Option<String>,
    pub correct_text: String,
}

impl ReviewEntry {
    #[must_use]
    pub fn from_record(number: usize, record: &AnswerRecord) -> Self {
        Self {
            number,
            question_text: record.text.clone(),
            is_correct: record.is_correct(),
            selected_text: record.selected_text().map(str::to_owned),
            correct_text: record.correct_text().to_owned(),
        }
    }
}

/// Everything the result screen shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub correct: usize,
    pub total: usize,
    pub percent: Percent,
    pub remark: Remark,
    pub review_entries: Vec<ReviewEntry>,
    pub celebrate: bool,
}

impl Summary {
    /// Text offered to the share surface.
    #[must_use]
    pub fn share_message(&self) -> String {
        share_message(self.percent)
    }
}

#[must_use]
pub fn build_summary(report: &SessionReport) -> Summary {
    let percent = report.percent();
    Summary {
        correct: report.correct_count(),
        total: report.total(),
        percent,
        remark: Remark::for_percent(percent),
        review_entries: report
            .answers()
            .iter()
            .enumerate()
            .map(|(i, record)| ReviewEntry::from_record(i + 1, record))
            .collect(),
        celebrate: percent.value() >= CELEBRATION_THRESHOLD,
    }
}

#[must_use]
pub fn share_message(percent: Percent) -> String {
    format!("I scored {percent} on QuizMaster! Can you beat me?")
}
