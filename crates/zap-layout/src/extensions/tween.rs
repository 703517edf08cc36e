// extensions/tween.rs
//
// Tween executor — plays a declarative `Timeline` against the board.
// Reconciliation never calls in here; the game drives it once per frame.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.play(&timeline, &board, Some(DEAL_FINISHED));
//   tweens.tick(dt, &mut board);  // Advances all tweens, writes transforms

use std::collections::HashMap;
use glam::Vec3;
use crate::api::types::DisplayableId;
use crate::core::board::LayoutBoard;
use crate::layout::equivalence::euler_delta;
use super::easing::{Easing, ease, ease_vec3};
use super::timeline::{Timeline, TimelineEntry, TweenChannel, TweenProperty};

/// What property a tween animates, with resolved start and end values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenTarget {
    Position { from: Vec3, to: Vec3 },
    /// `to` is unwrapped so the interpolation follows the shortest arc.
    Rotation { from: Vec3, to: Vec3 },
    Scale { from: f32, to: f32 },
}

impl TweenTarget {
    pub fn channel(&self) -> TweenChannel {
        match self {
            TweenTarget::Position { .. } => TweenChannel::Position,
            TweenTarget::Rotation { .. } => TweenChannel::Rotation,
            TweenTarget::Scale { .. } => TweenChannel::Scale,
        }
    }
}

/// A single running transition.
#[derive(Debug, Clone)]
pub struct Tween {
    pub target: TweenTarget,
    /// Seconds to wait before starting.
    pub delay: f32,
    /// Duration in seconds.
    pub duration: f32,
    /// Elapsed time, including the delay.
    pub elapsed: f32,
    pub easing: Easing,
    /// Callback ID reported through `drain_completed` when finished.
    pub on_complete: Option<u32>,
}

impl Tween {
    /// Resolve a timeline entry against the displayable's current transform.
    fn from_entry(entry: &TimelineEntry, board: &LayoutBoard) -> Option<Self> {
        let transform = board.get(entry.target)?.transform;
        let target = match entry.property {
            TweenProperty::Position(to) => TweenTarget::Position { from: transform.position, to },
            TweenProperty::Rotation(to) => TweenTarget::Rotation {
                from: transform.rotation,
                to: transform.rotation + euler_delta(transform.rotation, to),
            },
            TweenProperty::Scale(to) => TweenTarget::Scale { from: transform.scale, to },
        };
        Some(Self {
            target,
            delay: entry.start_offset,
            duration: entry.duration,
            elapsed: 0.0,
            easing: entry.easing,
            on_complete: None,
        })
    }

    /// Normalized progress [0, 1], ignoring the delay.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            if self.elapsed >= self.delay { 1.0 } else { 0.0 }
        } else {
            ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }
}

/// Handle to a tween for later reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u32);

/// Manages all active tweens.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: HashMap<TweenId, (DisplayableId, Tween)>,
    next_id: u32,
    /// Completed tween events to be polled.
    completed_events: Vec<u32>,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween. Any running tween on the same displayable and property is
    /// dropped: the newest request wins.
    pub fn add(&mut self, displayable: DisplayableId, tween: Tween) -> TweenId {
        let channel = tween.target.channel();
        self.tweens
            .retain(|_, (d, t)| !(*d == displayable && t.target.channel() == channel));
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(id, (displayable, tween));
        id
    }

    /// Start every entry of `timeline`, capturing start values from the
    /// board now. `on_complete` is reported once the longest entry finishes,
    /// or immediately if the timeline is empty.
    pub fn play(
        &mut self,
        timeline: &Timeline,
        board: &LayoutBoard,
        on_complete: Option<u32>,
    ) -> Vec<TweenId> {
        let mut ids = Vec::with_capacity(timeline.len());
        let mut last: Option<(TweenId, f32)> = None;
        for entry in timeline.entries() {
            let Some(tween) = Tween::from_entry(entry, board) else {
                log::debug!("skipping tween for unregistered {:?}", entry.target);
                continue;
            };
            let id = self.add(entry.target, tween);
            if last.map_or(true, |(_, end)| entry.end_time() >= end) {
                last = Some((id, entry.end_time()));
            }
            ids.push(id);
        }

        if let Some(event_id) = on_complete {
            match last.and_then(|(id, _)| self.get_mut(id)) {
                Some(tween) => tween.on_complete = Some(event_id),
                None => self.completed_events.push(event_id),
            }
        }
        ids
    }

    /// Remove a tween by handle.
    pub fn remove(&mut self, id: TweenId) -> bool {
        self.tweens.remove(&id).is_some()
    }

    /// Remove all tweens for a displayable, e.g. when the player grabs it.
    pub fn remove_displayable(&mut self, displayable: DisplayableId) {
        self.tweens.retain(|_, (d, _)| *d != displayable);
    }

    pub fn is_animating(&self, displayable: DisplayableId) -> bool {
        self.tweens.values().any(|(d, _)| *d == displayable)
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.tweens.get(&id).map(|(_, t)| t)
    }

    pub fn get_mut(&mut self, id: TweenId) -> Option<&mut Tween> {
        self.tweens.get_mut(&id).map(|(_, t)| t)
    }

    /// Advance all tweens and write the interpolated transforms.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(&mut self, dt: f32, board: &mut LayoutBoard) -> usize {
        let mut completed = Vec::new();

        for (&id, (displayable, tween)) in self.tweens.iter_mut() {
            tween.elapsed += dt;
            if tween.elapsed < tween.delay {
                continue;
            }

            let t = tween.progress();
            if let Some(entity) = board.get_mut(*displayable) {
                let transform = &mut entity.transform;
                match tween.target {
                    TweenTarget::Position { from, to } => {
                        transform.position = ease_vec3(from, to, t, tween.easing);
                    }
                    TweenTarget::Rotation { from, to } => {
                        transform.rotation = ease_vec3(from, to, t, tween.easing);
                    }
                    TweenTarget::Scale { from, to } => {
                        transform.scale = ease(from, to, t, tween.easing);
                    }
                }
            }

            if tween.is_complete() {
                if let Some(event_id) = tween.on_complete {
                    self.completed_events.push(event_id);
                }
                completed.push(id);
            }
        }

        let count = completed.len();
        for id in completed {
            self.tweens.remove(&id);
        }
        count
    }

    /// Drain completion callback IDs.
    pub fn drain_completed(&mut self) -> impl Iterator<Item = u32> + '_ {
        self.completed_events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
        self.completed_events.clear();
    }
}
