use thiserror::Error;

/// Number of questions drawn per session when nothing else is configured.
pub const DEFAULT_SESSION_LENGTH: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("session length must be > 0")]
    InvalidSessionLength,
}

/// Quiz-wide settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    session_length: u32,
}

impl QuizConfig {
    /// Creates a config with the given session length.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSessionLength` if `session_length` is zero.
    pub fn new(session_length: u32) -> Result<Self, ConfigError> {
        if session_length == 0 {
            return Err(ConfigError::InvalidSessionLength);
        }
        Ok(Self { session_length })
    }

    /// Number of questions sampled per session.
    #[must_use]
    pub fn session_length(&self) -> u32 {
        self.session_length
    }

    /// Session length as a `usize`, saturating on narrow targets.
    #[must_use]
    pub fn session_len(&self) -> usize {
        usize::try_from(self.session_length).unwrap_or(usize::MAX)
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            session_length: DEFAULT_SESSION_LENGTH,
        }
    }
}
