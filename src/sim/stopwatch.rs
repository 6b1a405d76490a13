//! Elapsed-time accumulator used by cooldown checks

/// Accumulates frame deltas since the last restart
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stopwatch {
    elapsed: f32,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }
}
