// src/animation/summon.rs
//
// The summon timeline.
// A trigger turns the card from edge-on (-90°) to face-on after a short pause,
// then sweeps the lines out from the card to the screen boundary.

use super::easing::EasingType;
use super::reveal::RevealWindow;
use crate::config::TimingConfig;

const EDGE_ON_DEGREES: f32 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummonPhase {
    Idle,
    Delay,
    Flip,
    Reveal,
    Done,
}

/// Everything the renderer needs to draw one frame of the summon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummonFrame {
    pub phase: SummonPhase,
    pub card_angle_deg: f32,
    pub reveal: RevealWindow,
}

pub struct SummonSequence {
    timing: TimingConfig,
    started_at: Option<f32>,
    phase: SummonPhase,
}

impl SummonSequence {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            timing,
            started_at: None,
            phase: SummonPhase::Idle,
        }
    }

    /// Restarts the timeline from the top. The caller swaps in a fresh burst.
    pub fn trigger(&mut self, now: f32) {
        log::info!("Summon triggered at {:.3}s", now);
        self.started_at = Some(now);
        self.phase = SummonPhase::Delay;
    }

    pub fn phase(&self) -> SummonPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            SummonPhase::Delay | SummonPhase::Flip | SummonPhase::Reveal
        )
    }

    pub fn update(&mut self, now: f32) -> SummonFrame {
        let frame = self.frame_at(now);
        if frame.phase != self.phase {
            log::debug!("Summon phase {:?} -> {:?}", self.phase, frame.phase);
            self.phase = frame.phase;
        }
        frame
    }

    pub fn frame_at(&self, now: f32) -> SummonFrame {
        let Some(started_at) = self.started_at else {
            return SummonFrame {
                phase: SummonPhase::Idle,
                card_angle_deg: EDGE_ON_DEGREES,
                reveal: RevealWindow::HIDDEN,
            };
        };

        let timing = &self.timing;
        let elapsed = (now - started_at).max(0.0);
        let flip_end = timing.delay + timing.flip_duration;
        let reveal_end = flip_end + timing.reveal_duration;

        if elapsed < timing.delay {
            SummonFrame {
                phase: SummonPhase::Delay,
                card_angle_deg: EDGE_ON_DEGREES,
                reveal: RevealWindow::START,
            }
        } else if elapsed < flip_end {
            let t = eased(timing.easing, elapsed - timing.delay, timing.flip_duration);
            SummonFrame {
                phase: SummonPhase::Flip,
                card_angle_deg: EDGE_ON_DEGREES * (1.0 - t),
                reveal: RevealWindow::START,
            }
        } else if elapsed < reveal_end {
            let t = eased(timing.easing, elapsed - flip_end, timing.reveal_duration);
            SummonFrame {
                phase: SummonPhase::Reveal,
                card_angle_deg: 0.0,
                reveal: RevealWindow::lerp(RevealWindow::START, RevealWindow::END, t),
            }
        } else {
            SummonFrame {
                phase: SummonPhase::Done,
                card_angle_deg: 0.0,
                reveal: RevealWindow::END,
            }
        }
    }
}

fn eased(easing: EasingType, elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    easing.apply(elapsed / duration)
}
