/// Live-region text after the result lands on the clipboard.
pub const COPIED_ANNOUNCEMENT: &str = "Result copied to clipboard";

/// How sharing the result ended, as reported by the webview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the system share sheet.
    Shared,
    Copied,
    Failed,
}

impl ShareOutcome {
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status {
            "shared" => Self::Shared,
            "copied" => Self::Copied,
            _ => Self::Failed,
        }
    }

    /// The share sheet speaks for itself; only a silent clipboard copy is
    /// announced.
    #[must_use]
    pub fn announcement(self) -> Option<&'static str> {
        match self {
            Self::Copied => Some(COPIED_ANNOUNCEMENT),
            Self::Shared | Self::Failed => None,
        }
    }
}
