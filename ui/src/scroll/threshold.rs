//! Pure state for the scroll-threshold signal.

/// Tracks whether the latest observed offset sits at or past `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThreshold {
    threshold: u32,
    past: bool,
}

impl ScrollThreshold {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            past: false,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn is_past(&self) -> bool {
        self.past
    }

    /// Feed a new vertical offset. Returns `true` when the flag flipped.
    ///
    /// The result depends on `offset` alone; earlier observations have no
    /// influence.
    pub fn observe(&mut self, offset: f64) -> bool {
        let past = offset >= f64::from(self.threshold);
        let changed = past != self.past;
        self.past = past;
        changed
    }
}
