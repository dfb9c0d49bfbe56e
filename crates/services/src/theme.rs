use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use storage::repository::KeyValueStore;

/// Storage key holding the chosen color theme.
pub const THEME_KEY: &str = "quizmaster_theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme to use when nothing is stored, following the system scheme.
    #[must_use]
    pub fn system_default(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(()),
        }
    }
}

/// Best-effort persisted theme preference.
#[derive(Clone)]
pub struct ThemeStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ThemeStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Stored theme, if one was saved and is still readable.
    pub async fn load(&self) -> Option<Theme> {
        match self.kv.read(THEME_KEY).await {
            Ok(raw) => raw.and_then(|raw| raw.parse().ok()),
            Err(err) => {
                tracing::warn!(%err, "theme preference unavailable");
                None
            }
        }
    }

    /// Stored theme, or `fallback` when nothing usable is stored.
    pub async fn load_or(&self, fallback: Theme) -> Theme {
        self.load().await.unwrap_or(fallback)
    }

    /// Persist `theme`; returns whether the write went through.
    pub async fn save(&self, theme: Theme) -> bool {
        match self.kv.write(THEME_KEY, theme.as_str()).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "theme preference not saved");
                false
            }
        }
    }
}
