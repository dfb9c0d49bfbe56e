use std::sync::Arc;

use quiz_core::model::{Percent, SessionReport, percent_of};
use storage::repository::KeyValueStore;

use crate::error::ScoreStoreError;

/// Storage key holding the best percentage ever scored.
pub const BEST_SCORE_KEY: &str = "quizmaster_best";

/// What `record_if_higher` did with a score.
#[derive(Debug)]
pub enum RecordOutcome {
    /// The new percentage was stored.
    Recorded {
        percent: Percent,
        previous: Option<Percent>,
    },
    /// A stored best at least as high was kept.
    Kept { percent: Percent, best: Percent },
    /// The store could not be read or written; nothing changed.
    Skipped {
        percent: Percent,
        reason: ScoreStoreError,
    },
}

impl RecordOutcome {
    #[must_use]
    pub fn percent(&self) -> Percent {
        match self {
            Self::Recorded { percent, .. }
            | Self::Kept { percent, .. }
            | Self::Skipped { percent, .. } => *percent,
        }
    }

    #[must_use]
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}

/// Best-score record over a key-value store.
///
/// Every storage failure is reported in the return value and logged, never
/// raised to the session.
#[derive(Clone)]
pub struct ScoreStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ScoreStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Read the stored best.
    ///
    /// # Errors
    ///
    /// Returns `ScoreStoreError::Storage` if the store cannot be read and
    /// `ScoreStoreError::Corrupt` if the stored value is not a percentage.
    pub async fn read_best(&self) -> Result<Option<Percent>, ScoreStoreError> {
        let Some(raw) = self.kv.read(BEST_SCORE_KEY).await? else {
            return Ok(None);
        };
        parse_percent(&raw)
            .map(Some)
            .ok_or(ScoreStoreError::Corrupt { raw })
    }

    /// Stored best, treating any failure as "nothing stored".
    pub async fn best(&self) -> Option<Percent> {
        match self.read_best().await {
            Ok(best) => best,
            Err(err) => {
                tracing::warn!(%err, "best score unavailable");
                None
            }
        }
    }

    /// Persist `round(100 * correct / total)` if it beats the stored best.
    pub async fn record_if_higher(&self, correct: usize, total: usize) -> RecordOutcome {
        let percent = percent_of(correct, total);

        let previous = match self.read_best().await {
            Ok(previous) => previous,
            Err(ScoreStoreError::Corrupt { raw }) => {
                tracing::warn!(raw = %raw, "replacing unreadable best score");
                None
            }
            Err(reason) => {
                tracing::warn!(err = %reason, "best score not recorded");
                return RecordOutcome::Skipped { percent, reason };
            }
        };

        match previous {
            Some(best) if best >= percent => return RecordOutcome::Kept { percent, best },
            _ => {}
        }

        if let Err(err) = self
            .kv
            .write(BEST_SCORE_KEY, &percent.value().to_string())
            .await
        {
            tracing::warn!(%err, "best score not recorded");
            return RecordOutcome::Skipped {
                percent,
                reason: err.into(),
            };
        }

        tracing::info!(%percent, "new best score");
        RecordOutcome::Recorded { percent, previous }
    }

    /// Record a finished session.
    pub async fn record_report(&self, report: &SessionReport) -> RecordOutcome {
        self.record_if_higher(report.correct_count(), report.total())
            .await
    }
}

fn parse_percent(raw: &str) -> Option<Percent> {
    let value: u8 = raw.trim().parse().ok()?;
    (value <= 100).then(|| Percent::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::{InMemoryStore, UnavailableStore};

    fn store() -> (ScoreStore, InMemoryStore) {
        let kv = InMemoryStore::new();
        (ScoreStore::new(Arc::new(kv.clone())), kv)
    }

    #[tokio::test]
    async fn first_score_is_always_recorded() {
        let (scores, _) = store();
        assert_eq!(scores.best().await, None);

        let outcome = scores.record_if_higher(3, 10).await;
        assert!(outcome.is_recorded());
        assert_eq!(scores.best().await, Some(Percent::new(30)));
    }

    #[tokio::test]
    async fn lower_or_equal_score_keeps_best() {
        let (scores, kv) = store();
        kv.write(BEST_SCORE_KEY, "70").await.unwrap();

        let outcome = scores.record_if_higher(13, 20).await;
        assert!(matches!(
            outcome,
            RecordOutcome::Kept { percent, best } if percent.value() == 65 && best.value() == 70
        ));
        let outcome = scores.record_if_higher(7, 10).await;
        assert!(matches!(outcome, RecordOutcome::Kept { .. }));
        assert_eq!(scores.best().await, Some(Percent::new(70)));
    }

    #[tokio::test]
    async fn best_never_decreases() {
        let (scores, _) = store();
        let mut last = None;
        for (correct, total) in [(5, 10), (9, 10), (2, 10), (9, 10), (10, 10), (0, 10)] {
            scores.record_if_higher(correct, total).await;
            let best = scores.best().await;
            assert!(best >= last, "{best:?} < {last:?}");
            last = best;
        }
        assert_eq!(last, Some(Percent::new(100)));
    }

    #[tokio::test]
    async fn unavailable_store_is_skipped_not_raised() {
        let scores = ScoreStore::new(Arc::new(UnavailableStore));
        assert_eq!(scores.best().await, None);
        assert!(matches!(
            scores.read_best().await,
            Err(ScoreStoreError::Storage(_))
        ));

        let outcome = scores.record_if_higher(10, 10).await;
        assert!(matches!(outcome, RecordOutcome::Skipped { .. }));
        assert_eq!(outcome.percent().value(), 100);
    }

    #[tokio::test]
    async fn corrupt_value_is_replaced() {
        let (scores, kv) = store();
        kv.write(BEST_SCORE_KEY, "not-a-number").await.unwrap();
        assert_eq!(scores.best().await, None);

        let outcome = scores.record_if_higher(1, 2).await;
        assert!(matches!(outcome, RecordOutcome::Recorded { previous: None, .. }));
        assert_eq!(kv.read(BEST_SCORE_KEY).await.unwrap().as_deref(), Some("50"));
    }
}
