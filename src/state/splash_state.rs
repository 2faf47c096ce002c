//! Loading screen animation state
//!
//! Progress climbs one percent per tick from elapsed time. Once it passes
//! 20% the slogans start to scramble and settle left to right.

use rand::Rng;
use std::time::{Duration, Instant};

/// Glyphs used for unsettled characters
const SCRAMBLE_GLYPHS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '[', ']', '{', '}',
    '|', ';', ':', ',', '.', '<', '>', '?', '/',
];

pub const BRAND: &str = "BOLDVIZBYTE";

pub const SLOGANS: [&str; 3] = ["INNOVATE.", "VISUALIZE.", "DOMINATE."];

/// Label shown next to the percentage
pub const PROGRESS_LABEL: &str = "SYSTEM_INITIALIZING";

/// Slogans scramble only once progress is above this
const SCRAMBLE_THRESHOLD: u16 = 20;

/// Animation phase for the loading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Progress bar filling
    Loading,
    /// At 100%, held briefly before leaving
    Hold,
    /// Animation finished
    Complete,
}

/// Loading screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the loading screen started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Time since start as of the last update
    elapsed: Duration,
}

impl SplashState {
    /// One percent of progress per tick
    const TICK: Duration = Duration::from_millis(40);
    /// Time for progress to reach 100%
    const LOAD_DURATION: Duration = Duration::from_millis(4000);
    /// Pause at 100% before completing
    const HOLD_DURATION: Duration = Duration::from_millis(800);
    /// One more slogan character settles per step
    const REVEAL_STEP: Duration = Duration::from_millis(90);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Loading,
            elapsed: Duration::ZERO,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self) {
        self.update_at(self.start_time.elapsed());
    }

    fn update_at(&mut self, elapsed: Duration) {
        if self.phase == SplashPhase::Complete {
            return;
        }

        self.elapsed = elapsed;
        self.phase = if elapsed < Self::LOAD_DURATION {
            SplashPhase::Loading
        } else if elapsed < Self::LOAD_DURATION + Self::HOLD_DURATION {
            SplashPhase::Hold
        } else {
            SplashPhase::Complete
        };
    }

    /// Progress as a whole percentage
    pub fn percent(&self) -> u16 {
        let ticks = self.elapsed.as_millis() / Self::TICK.as_millis();
        ticks.min(100) as u16
    }

    /// Whether the slogans have started scrambling
    pub fn is_scrambling(&self) -> bool {
        self.percent() > SCRAMBLE_THRESHOLD && self.phase != SplashPhase::Complete
    }

    /// Characters of each slogan that have settled since scrambling began
    fn settled_chars(&self) -> usize {
        let started = Self::TICK * u32::from(SCRAMBLE_THRESHOLD + 1);
        let since = self.elapsed.saturating_sub(started);
        (since.as_millis() / Self::REVEAL_STEP.as_millis()) as usize
    }

    /// Slogans as currently displayed. Before scrambling starts (and after
    /// completion) they read plainly.
    pub fn slogans<R: Rng>(&self, rng: &mut R) -> [String; 3] {
        if !self.is_scrambling() {
            return SLOGANS.map(String::from);
        }
        let settled = self.settled_chars();
        SLOGANS.map(|slogan| {
            slogan
                .chars()
                .enumerate()
                .map(|(i, c)| {
                    if i < settled {
                        c
                    } else {
                        SCRAMBLE_GLYPHS[rng.gen_range(0..SCRAMBLE_GLYPHS.len())]
                    }
                })
                .collect()
        })
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
        self.elapsed = Self::LOAD_DURATION + Self::HOLD_DURATION;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}
