//! Timing of a token walking along a found path.
//!
//! A [Playback] never sleeps or draws. A renderer asks it where the token is a given time after
//! playback started and which cells it has already passed, and advances its own clock.

use crate::{Coordinate, DEFAULT_STEP_INTERVAL};
use std::time::Duration;

/// Key frames for moving a token along a path, one cell per `step_interval`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playback {
    path: Vec<Coordinate>,
    step_interval: Duration,
}

impl Playback {
    /// Panics if `step_interval` is zero.
    pub fn new(path: Vec<Coordinate>, step_interval: Duration) -> Playback {
        assert!(!step_interval.is_zero(), "step interval must be positive");
        Playback {
            path,
            step_interval,
        }
    }

    pub fn with_default_interval(path: Vec<Coordinate>) -> Playback {
        Playback::new(path, DEFAULT_STEP_INTERVAL)
    }

    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    pub fn step_interval(&self) -> Duration {
        self.step_interval
    }

    /// An empty playback stands for "no path found" and has nothing to animate.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Each cell of the path paired with the time at which the token arrives there.
    pub fn keyframes(&self) -> impl Iterator<Item = (Duration, Coordinate)> + '_ {
        (0_u32..)
            .zip(self.path.iter())
            .map(move |(i, &coord)| (self.step_interval * i, coord))
    }

    /// Time at which the token reaches the last cell.
    pub fn duration(&self) -> Duration {
        match self.path.len() {
            0 => Duration::ZERO,
            n => self.step_interval * (n as u32 - 1),
        }
    }

    fn frame_index_at(&self, elapsed: Duration) -> Option<usize> {
        let last = self.path.len().checked_sub(1)?;
        let frame = elapsed.as_nanos() / self.step_interval.as_nanos();
        Some(usize::try_from(frame).map_or(last, |frame| frame.min(last)))
    }

    /// Where the token stands `elapsed` after playback started. Stays on the goal once the path
    /// is finished; [None] for an empty path.
    pub fn position_at(&self, elapsed: Duration) -> Option<Coordinate> {
        self.frame_index_at(elapsed).map(|i| self.path[i])
    }

    /// The cells the token has visited so far, its current cell included.
    pub fn trail_at(&self, elapsed: Duration) -> &[Coordinate] {
        match self.frame_index_at(elapsed) {
            Some(i) => &self.path[..=i],
            None => &[],
        }
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration()
    }
}
