//! Movement domain: detection of acceleration that produces no progress.

/// What the controller observed during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSample {
    /// The controller took its accelerating branch this tick.
    pub accelerating: bool,
    /// `relation_to_destination.x` did not change since the previous tick.
    pub relation_unchanged: bool,
    /// Horizontal velocity measured at the start of the tick was zero.
    pub started_at_rest: bool,
}

impl ProgressSample {
    fn is_stalled(&self) -> bool {
        self.accelerating && (self.relation_unchanged || self.started_at_rest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StuckVerdict {
    Progressing,
    Stalled(f32),
    /// Threshold crossed; the timer has already been reset.
    Escape,
}

#[derive(Debug, Clone)]
pub struct StuckDetector {
    stuck_time: f32,
    threshold: f32,
}

impl StuckDetector {
    pub fn new(threshold: f32) -> Self {
        Self {
            stuck_time: 0.0,
            threshold,
        }
    }

    pub fn stuck_time(&self) -> f32 {
        self.stuck_time
    }

    pub fn observe(&mut self, dt: f32, sample: ProgressSample) -> StuckVerdict {
        if !sample.is_stalled() {
            self.stuck_time = 0.0;
            return StuckVerdict::Progressing;
        }

        self.stuck_time += dt;
        if self.stuck_time > self.threshold {
            self.stuck_time = 0.0;
            StuckVerdict::Escape
        } else {
            StuckVerdict::Stalled(self.stuck_time)
        }
    }
}
