use std::sync::Arc;

use quiz_core::grader::Grade;
use quiz_core::model::{Question, QuizConfig, SessionReport};

use super::service::{Advance, QuestionPhase, QuizSession, Submission};
use super::summary::{Summary, build_summary};
use crate::Clock;
use crate::bank::QuestionBank;
use crate::error::SessionError;
use crate::presentation::PresentationPort;

/// Announcement sent after a submit is graded.
pub const SUBMITTED_ANNOUNCEMENT: &str = "Answer submitted.";

/// Result of the single "next" action that grades first and advances after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Graded(Submission),
    Next { index: usize },
    Finished(SessionReport),
}

/// Owns the live quiz session and pushes every state change to a presenter.
///
/// Only one session is live at a time; `start` replaces it wholesale.
pub struct QuizController<P> {
    bank: Arc<QuestionBank>,
    config: QuizConfig,
    clock: Clock,
    presenter: P,
    session: Option<QuizSession>,
}

impl<P: PresentationPort> QuizController<P> {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, config: QuizConfig, presenter: P) -> Self {
        Self {
            bank,
            config,
            clock: Clock::default(),
            presenter,
            session: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Sample a fresh question set and start over on question 0.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if sampling produced no questions.
    pub fn start(&mut self) -> Result<(), SessionError> {
        let questions = self.bank.sample(self.config.session_len());
        self.start_with(questions)
    }

    /// Start over with an explicit question sequence.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty.
    pub fn start_with(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        let session = QuizSession::start(questions, self.clock.now())?;
        tracing::info!(total = session.total(), "quiz session started");
        self.session = Some(session);
        self.render_current();
        Ok(())
    }

    /// Select a choice on the current question.
    ///
    /// # Errors
    ///
    /// Forwards any rejection from the session; nothing is rendered then.
    pub fn select(&mut self, choice_index: usize) -> Result<(), SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NotStarted)?;
        session.select(choice_index).inspect_err(log_rejection)?;
        self.presenter.select_choice(choice_index);
        Ok(())
    }

    /// Grade the current selection.
    ///
    /// # Errors
    ///
    /// Forwards any rejection from the session; nothing is rendered then.
    pub fn submit(&mut self) -> Result<Submission, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NotStarted)?;
        let submission = session.submit().inspect_err(log_rejection)?;

        let grade: &Grade = &submission.grade;
        self.presenter
            .mark_graded(grade.correct_index, Some(submission.selected));
        self.presenter.show_feedback(
            grade.is_correct,
            &grade.correct_text,
            grade.explanation.as_deref(),
        );
        self.presenter.announce(SUBMITTED_ANNOUNCEMENT);
        tracing::debug!(
            index = submission.index,
            is_correct = grade.is_correct,
            "question graded"
        );

        Ok(submission)
    }

    /// Move past a graded question, finishing on the last one.
    ///
    /// # Errors
    ///
    /// Forwards any rejection from the session; nothing is rendered then.
    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        let now = self.clock.now();
        let session = self.session.as_mut().ok_or(SessionError::NotStarted)?;
        let step = session.advance(now).inspect_err(log_rejection)?;

        match &step {
            Advance::Next { .. } => self.render_current(),
            Advance::Finished(report) => {
                let summary = build_summary(report);
                tracing::info!(
                    correct = report.correct_count(),
                    total = report.total(),
                    percent = summary.percent.value(),
                    "quiz session finished"
                );
                self.presenter.show_summary(&summary);
            }
        }
        Ok(step)
    }

    /// Grade when ungraded, otherwise advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotSelected` when nothing is selected yet, or
    /// any other rejection from `submit`/`advance`.
    pub fn proceed(&mut self) -> Result<Step, SessionError> {
        let graded = self
            .session
            .as_ref()
            .ok_or(SessionError::NotStarted)?
            .phase()
            == QuestionPhase::Graded;

        if graded {
            return Ok(match self.advance()? {
                Advance::Next { index } => Step::Next { index },
                Advance::Finished(report) => Step::Finished(report),
            });
        }
        self.submit().map(Step::Graded)
    }

    /// Summary of the finished session, if any.
    #[must_use]
    pub fn summary(&self) -> Option<Summary> {
        self.session
            .as_ref()
            .and_then(QuizSession::report)
            .map(build_summary)
    }

    fn render_current(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let Some(question) = session.current_question() else {
            return;
        };
        let index = session.current_index();
        let total = session.total();
        self.presenter
            .render_question(index, total, question.text(), question.choices());
        self.presenter
            .announce(&format!("Question {} of {}", index + 1, total));
    }
}

fn log_rejection(err: &SessionError) {
    tracing::debug!(%err, "quiz operation rejected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{PresenterCall, RecordingPresenter};
    use quiz_core::time::fixed_clock;

    fn controller(len: u32) -> QuizController<RecordingPresenter> {
        let bank = Arc::new(QuestionBank::builtin().unwrap());
        QuizController::new(bank, QuizConfig::new(len).unwrap(), RecordingPresenter::new())
            .with_clock(fixed_clock())
    }

    #[test]
    fn operations_before_start_are_rejected() {
        let mut ctl = controller(3);
        assert_eq!(ctl.select(0).unwrap_err(), SessionError::NotStarted);
        assert_eq!(ctl.submit().unwrap_err(), SessionError::NotStarted);
        assert_eq!(ctl.advance().unwrap_err(), SessionError::NotStarted);
        assert!(ctl.presenter().calls().is_empty());
    }

    #[test]
    fn start_renders_first_question_and_announces() {
        let mut ctl = controller(3);
        ctl.start().unwrap();

        let calls = ctl.presenter().calls();
        assert!(matches!(
            &calls[0],
            PresenterCall::RenderQuestion { index: 0, total: 3, .. }
        ));
        assert_eq!(
            calls[1],
            PresenterCall::Announce("Question 1 of 3".to_string())
        );
    }

    #[test]
    fn submit_marks_feedback_and_announces() {
        let mut ctl = controller(2);
        ctl.start().unwrap();
        ctl.presenter_mut().take();

        let answer = ctl.session().unwrap().current_question().unwrap().answer_index();
        ctl.select(answer).unwrap();
        let submission = ctl.submit().unwrap();
        assert!(submission.grade.is_correct);

        let calls = ctl.presenter().calls();
        assert_eq!(calls[0], PresenterCall::SelectChoice(answer));
        assert_eq!(
            calls[1],
            PresenterCall::MarkGraded {
                correct_index: answer,
                selected: Some(answer),
            }
        );
        assert!(matches!(
            &calls[2],
            PresenterCall::ShowFeedback { is_correct: true, .. }
        ));
        assert_eq!(
            calls[3],
            PresenterCall::Announce(SUBMITTED_ANNOUNCEMENT.to_string())
        );
    }

    #[test]
    fn rejected_calls_render_nothing() {
        let mut ctl = controller(2);
        ctl.start().unwrap();
        ctl.presenter_mut().take();

        assert_eq!(ctl.submit().unwrap_err(), SessionError::NotSelected);
        assert_eq!(ctl.advance().unwrap_err(), SessionError::NotGraded);
        assert!(matches!(
            ctl.select(99).unwrap_err(),
            SessionError::ChoiceOutOfRange { index: 99, .. }
        ));
        assert!(ctl.presenter().calls().is_empty());
    }

    #[test]
    fn proceed_grades_then_advances() {
        let mut ctl = controller(2);
        ctl.start().unwrap();
        assert_eq!(ctl.proceed().unwrap_err(), SessionError::NotSelected);

        ctl.select(0).unwrap();
        assert!(matches!(ctl.proceed().unwrap(), Step::Graded(_)));
        assert_eq!(ctl.proceed().unwrap(), Step::Next { index: 1 });

        ctl.select(1).unwrap();
        assert!(matches!(ctl.proceed().unwrap(), Step::Graded(s) if s.is_last));
        assert!(matches!(ctl.proceed().unwrap(), Step::Finished(_)));
        assert!(ctl.summary().is_some());
        assert!(matches!(
            ctl.presenter().last(),
            Some(PresenterCall::ShowSummary(_))
        ));
    }

    #[test]
    fn restart_replaces_session() {
        let mut ctl = controller(2);
        ctl.start().unwrap();
        ctl.select(0).unwrap();
        ctl.submit().unwrap();

        ctl.start().unwrap();
        let session = ctl.session().unwrap();
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.selected_index(), None);
    }
}
