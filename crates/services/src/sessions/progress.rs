/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// Zero-based index of the question on screen.
    pub index: usize,
    pub total: usize,
    pub answered: usize,
    pub correct: usize,
    /// Share of questions already left behind, as shown by the progress bar.
    pub percent_complete: u8,
    pub is_complete: bool,
}
