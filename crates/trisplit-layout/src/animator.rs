// ABOUTME: Timer-driven slide transitions between pane layouts.
// ABOUTME: Interpolates pane offsets and the list/ghost cross-fade on the host's clock.

use std::time::Duration;

use trisplit_core::Interpolator;

use crate::region::{Pane, Regions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionId(pub u64);

/// How a transition left the animator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    Completed(TransitionId),
    Cancelled(TransitionId),
}

/// Where one pane is heading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub x: f32,
    /// `None` leaves opacity alone
    pub alpha: Option<f32>,
}

impl Target {
    pub fn x(x: f32) -> Self {
        Self { x, alpha: None }
    }

    pub fn fade(x: f32, alpha: f32) -> Self {
        Self {
            x,
            alpha: Some(alpha),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Track {
    pane: Pane,
    from_x: f32,
    to_x: f32,
    alpha: Option<(f32, f32)>,
}

#[derive(Debug)]
struct Transition {
    id: TransitionId,
    elapsed: Duration,
    tracks: Vec<Track>,
}

#[derive(Debug)]
pub struct TransitionAnimator {
    duration: Duration,
    interpolator: Interpolator,
    active: Option<Transition>,
    next_id: u64,
}

impl TransitionAnimator {
    pub fn new(duration: Duration, interpolator: Interpolator) -> Self {
        Self {
            duration,
            interpolator,
            active: None,
            next_id: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_id(&self) -> Option<TransitionId> {
        self.active.as_ref().map(|t| t.id)
    }

    /// Begin moving every listed pane from where it is now towards its target.
    /// All tracks share one clock. A transition already running must be
    /// cancelled first; `start` replaces it without reporting.
    pub fn start(&mut self, regions: &Regions, targets: &[(Pane, Target)]) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;

        let tracks = targets
            .iter()
            .map(|&(pane, target)| {
                let region = regions.get(pane);
                Track {
                    pane,
                    from_x: region.x(),
                    to_x: target.x,
                    alpha: target.alpha.map(|to| (region.alpha(), to)),
                }
            })
            .collect();

        self.active = Some(Transition {
            id,
            elapsed: Duration::ZERO,
            tracks,
        });
        id
    }

    /// Stop the running transition where it is
    pub fn cancel(&mut self) -> Option<TransitionEvent> {
        self.active
            .take()
            .map(|transition| TransitionEvent::Cancelled(transition.id))
    }

    /// Advance the clock by `dt`, writing interpolated values into `regions`
    pub fn advance(&mut self, dt: Duration, regions: &mut Regions) -> Option<TransitionEvent> {
        let transition = self.active.as_mut()?;
        transition.elapsed = transition.elapsed.saturating_add(dt);

        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (transition.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let eased = self.interpolator.apply(progress);

        for track in &transition.tracks {
            let region = regions.get_mut(track.pane);
            if progress >= 1.0 {
                region.set_x(track.to_x);
            } else {
                region.set_x(lerp(track.from_x, track.to_x, eased));
            }
            if let Some((from, to)) = track.alpha {
                region.set_alpha(if progress >= 1.0 {
                    to
                } else {
                    lerp(from, to, eased)
                });
            }
        }

        if progress >= 1.0 {
            let id = transition.id;
            self.active = None;
            Some(TransitionEvent::Completed(id))
        } else {
            None
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
