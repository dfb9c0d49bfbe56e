#![forbid(unsafe_code)]

pub mod bank;
pub mod error;
pub mod presentation;
pub mod score_store;
pub mod sessions;
pub mod theme;

pub use quiz_core::Clock;
pub use sessions as session;

pub use bank::QuestionBank;
pub use error::{BankError, ScoreStoreError, SessionError};
pub use presentation::{PresentationPort, PresenterCall, RecordingPresenter};
pub use score_store::{BEST_SCORE_KEY, RecordOutcome, ScoreStore};
pub use theme::{THEME_KEY, Theme, ThemeStore};

pub use sessions::{
    Advance, QuestionPhase, QuizController, QuizSession, Remark, ReviewEntry, SessionProgress,
    Step, Submission, Summary, build_summary,
};
