/// Smoothed frames-per-second estimate fed by tick lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRate {
    fps: f32,
}

impl Default for FrameRate {
    fn default() -> Self {
        Self { fps: 60.0 }
    }
}

impl FrameRate {
    /// Average the current estimate with this frame's whole-number rate.
    /// Zero-length frames carry no rate and are skipped, as are frames too
    /// short for their rate to fit in an f32.
    pub fn record(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let rate = (1.0 / dt).floor();
        if rate.is_finite() {
            // Halve before summing so two large finite values cannot overflow.
            self.fps = self.fps * 0.5 + rate * 0.5;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}
