mod answer;
mod config;
mod ids;
mod question;
mod session;

pub use ids::{ParseIdError, QuestionId};

pub use answer::AnswerRecord;
pub use config::{ConfigError, DEFAULT_SESSION_LENGTH, QuizConfig};
pub use question::{Question, QuestionDraft, QuestionError};
pub use session::{Percent, SessionReport, percent_of};
