use quiz_core::model::Percent;
use services::{ReviewEntry, Summary};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub number: usize,
    pub question: String,
    pub is_correct: bool,
    pub your_answer: String,
    pub correct_answer: String,
}

impl From<&ReviewEntry> for ReviewItemVm {
    fn from(entry: &ReviewEntry) -> Self {
        let your_answer = if entry.is_correct {
            "Your answer was correct".to_string()
        } else {
            let picked = entry.selected_text.as_deref().unwrap_or("(no answer)");
            format!("Your answer: {picked}")
        };
        Self {
            number: entry.number,
            question: format!("{}. {}", entry.number, entry.question_text),
            is_correct: entry.is_correct,
            your_answer,
            correct_answer: format!("Correct answer: {}", entry.correct_text),
        }
    }
}

impl ReviewItemVm {
    /// Verdict and correct answer on one line, shown for every item.
    #[must_use]
    pub fn answer_line(&self) -> String {
        format!("{} • {}", self.your_answer, self.correct_answer)
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_correct {
            "review-item review-item--correct"
        } else {
            "review-item review-item--incorrect"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub score_label: String,
    pub percent_label: String,
    pub remark: &'static str,
    pub celebrate: bool,
    pub share_text: String,
    pub review: Vec<ReviewItemVm>,
}

impl From<&Summary> for SummaryVm {
    fn from(summary: &Summary) -> Self {
        Self {
            score_label: format!("{} / {}", summary.correct, summary.total),
            percent_label: summary.percent.to_string(),
            remark: summary.remark.message(),
            celebrate: summary.celebrate,
            share_text: summary.share_message(),
            review: summary
                .review_entries
                .iter()
                .map(ReviewItemVm::from)
                .collect(),
        }
    }
}

#[must_use]
pub fn best_score_label(best: Option<Percent>) -> String {
    match best {
        Some(best) => format!("Best score: {best}"),
        None => "Best score: none yet".to_string(),
    }
}
