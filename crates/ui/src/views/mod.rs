mod panels;
mod quiz;
mod scripts;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use panels::{QuestionPanel, ResultPanel, StartPanel};
pub use quiz::QuizView;
