pub mod plan;
mod progress;
mod service;
mod summary;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::{sample, sample_with};
pub use progress::SessionProgress;
pub use service::{Advance, QuestionPhase, QuizSession, Submission};
pub use summary::{
    CELEBRATION_THRESHOLD, Remark, ReviewEntry, Summary, build_summary, share_message,
};
pub use workflow::{QuizController, SUBMITTED_ANNOUNCEMENT, Step};
