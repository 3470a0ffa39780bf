//! Pure playback cursor over a materialized trace.
//!
//! Holds no timer and performs no I/O: the host drives it by calling
//! [`Playback::advance`] with elapsed wall time. At 1x speed the cursor moves
//! one step per second; speed scales that rate and is clamped to the
//! supported range. Seeking clamps to `[0, len-1]`.

/// Slowest supported playback rate.
pub const MIN_SPEED: f32 = 0.1;
/// Fastest supported playback rate.
pub const MAX_SPEED: f32 = 5.0;
/// Seconds per step at 1x.
pub const BASE_STEP_SECONDS: f32 = 1.0;

#[derive(Clone, Debug)]
pub struct Playback {
    len: usize,
    current: usize,
    speed: f32,
    playing: bool,
    accum: f32,
}

impl Playback {
    /// Cursor over a trace of `len` steps, parked at index 0, paused, 1x.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            speed: 1.0,
            playing: false,
            accum: 0.0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn last_index(&self) -> usize {
        self.len.saturating_sub(1)
    }

    pub fn can_step_forward(&self) -> bool {
        self.current < self.last_index()
    }

    pub fn can_step_backward(&self) -> bool {
        self.current > 0
    }

    /// Start advancing on subsequent [`advance`](Self::advance) calls.
    /// Playing from the last step (or an empty trace) is a no-op.
    pub fn play(&mut self) {
        if !self.can_step_forward() {
            return;
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.accum = 0.0;
    }

    pub fn reset(&mut self) {
        self.playing = false;
        self.current = 0;
        self.accum = 0.0;
    }

    pub fn step_forward(&mut self) -> bool {
        if self.can_step_forward() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn step_backward(&mut self) -> bool {
        if self.can_step_backward() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Seek directly to `index`, clamped into `[0, len-1]`.
    pub fn jump_to(&mut self, index: usize) {
        self.current = index.min(self.last_index());
    }

    /// Set the playback rate, clamped into `[MIN_SPEED, MAX_SPEED]`.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Completion in percent. A single-step trace reads as 0 until stepped.
    pub fn progress(&self) -> f32 {
        if self.len > 1 {
            (self.current as f32 / (self.len - 1) as f32) * 100.0
        } else {
            0.0
        }
    }

    /// Advance by `dt` seconds of host time, returning how many steps the
    /// cursor moved. Auto-pauses on reaching the last step.
    pub fn advance(&mut self, dt: f32) -> usize {
        if !self.playing || dt <= 0.0 {
            return 0;
        }

        self.accum += dt * self.speed;
        let mut moved = 0;
        while self.accum >= BASE_STEP_SECONDS && self.can_step_forward() {
            self.accum -= BASE_STEP_SECONDS;
            self.current += 1;
            moved += 1;
        }

        if !self.can_step_forward() {
            self.playing = false;
            self.accum = 0.0;
        }

        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_rate_scales_with_speed() {
        let mut pb = Playback::new(100);
        pb.play();
        assert_eq!(pb.advance(1.0), 1);

        pb.set_speed(5.0);
        assert_eq!(pb.advance(1.0), 5);
        assert_eq!(pb.current(), 6);

        pb.set_speed(0.1);
        assert_eq!(pb.advance(1.0), 0);
        assert_eq!(pb.advance(9.0), 1);
    }

    #[test]
    fn auto_pauses_at_end() {
        let mut pb = Playback::new(3);
        pb.play();
        assert_eq!(pb.advance(10.0), 2);
        assert_eq!(pb.current(), 2);
        assert!(!pb.is_playing());
        // Playing again from the end stays parked.
        pb.play();
        assert!(!pb.is_playing());
    }

    #[test]
    fn seek_and_speed_are_clamped() {
        let mut pb = Playback::new(5);
        pb.jump_to(999);
        assert_eq!(pb.current(), 4);
        pb.set_speed(50.0);
        assert_eq!(pb.speed(), MAX_SPEED);
        pb.set_speed(0.0);
        assert_eq!(pb.speed(), MIN_SPEED);
    }

    #[test]
    fn empty_trace_never_plays() {
        let mut pb = Playback::new(0);
        pb.play();
        assert!(!pb.is_playing());
        assert_eq!(pb.advance(5.0), 0);
        assert_eq!(pb.current(), 0);
        assert_eq!(pb.progress(), 0.0);
    }

    #[test]
    fn manual_stepping_respects_bounds() {
        let mut pb = Playback::new(2);
        assert!(!pb.step_backward());
        assert!(pb.step_forward());
        assert!(!pb.step_forward());
        assert_eq!(pb.current(), 1);
        pb.reset();
        assert_eq!(pb.current(), 0);
    }
}
