use std::time::Duration;

use rand::Rng;

pub const CONFETTI_PIECES: usize = 80;
/// How long the burst stays in the DOM; every fall has ended by then.
pub const CONFETTI_LIFETIME: Duration = Duration::from_secs(7);

const COLORS: [&str; 6] = [
    "#7c5cff", "#3ddc97", "#ffd166", "#ef476f", "#06d6a0", "#118ab2",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub left_vw: f32,
    pub top_vh: f32,
    pub width_px: f32,
    pub delay_s: f32,
    pub duration_s: f32,
    pub rotation_deg: f32,
    pub color: &'static str,
}

impl ConfettiPiece {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}vw; top: {:.1}vh; width: {:.1}px; height: {:.1}px; background: {}; \
             transform: rotate({:.0}deg); animation: confetti-fall {:.2}s ease-in {:.2}s forwards;",
            self.left_vw,
            self.top_vh,
            self.width_px,
            self.width_px * 1.4,
            self.color,
            self.rotation_deg,
            self.duration_s,
            self.delay_s,
        )
    }
}

/// Random pieces spread across the top of the viewport.
pub fn confetti_burst<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            left_vw: rng.random_range(0.0..100.0),
            top_vh: -10.0 - rng.random_range(0.0..20.0),
            width_px: rng.random_range(8.0..16.0),
            delay_s: rng.random_range(0.0..0.6),
            duration_s: rng.random_range(3.0..5.0),
            rotation_deg: rng.random_range(0.0..360.0),
            color: COLORS[rng.random_range(0..COLORS.len())],
        })
        .collect()
}
