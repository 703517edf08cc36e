// extensions/timeline.rs
//
// Declarative animation timeline. Reconciliation only *describes* motion
// here; an executor such as `TweenState` plays it back over time.
//
// Usage:
//   let mut timeline = Timeline::new();
//   board.apply_layout(hand, Some(&mut timeline))?;
//   tweens.play(&timeline, &board);

use glam::Vec3;
use crate::api::types::DisplayableId;
use super::easing::Easing;

/// Property transition described by a timeline entry, with its end value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenProperty {
    /// World position.
    Position(Vec3),
    /// Euler angles in degrees.
    Rotation(Vec3),
    /// Uniform scale.
    Scale(f32),
}

impl TweenProperty {
    /// Discriminant used to match competing entries for the same property.
    pub fn channel(&self) -> TweenChannel {
        match self {
            TweenProperty::Position(_) => TweenChannel::Position,
            TweenProperty::Rotation(_) => TweenChannel::Rotation,
            TweenProperty::Scale(_) => TweenChannel::Scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TweenChannel {
    Position,
    Rotation,
    Scale,
}

/// One transition: animate `property` of `target` starting at `start_offset`
/// seconds into the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineEntry {
    pub target: DisplayableId,
    pub property: TweenProperty,
    pub start_offset: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl TimelineEntry {
    pub fn end_time(&self) -> f32 {
        self.start_offset + self.duration
    }
}

/// Unordered bag of property transitions.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a transition starting at `at` seconds.
    pub fn insert(
        &mut self,
        at: f32,
        target: DisplayableId,
        property: TweenProperty,
        duration: f32,
        easing: Easing,
    ) {
        self.entries.push(TimelineEntry {
            target,
            property,
            start_offset: at,
            duration,
            easing,
        });
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Entries animating `target`.
    pub fn entries_for(&self, target: DisplayableId) -> impl Iterator<Item = &TimelineEntry> + '_ {
        self.entries.iter().filter(move |e| e.target == target)
    }

    /// Time at which the last entry finishes.
    pub fn duration(&self) -> f32 {
        self.entries.iter().map(TimelineEntry::end_time).fold(0.0, f32::max)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_latest_end() {
        let mut timeline = Timeline::new();
        assert_eq!(timeline.duration(), 0.0);
        timeline.insert(0.0, DisplayableId(1), TweenProperty::Scale(1.0), 0.3, Easing::Linear);
        timeline.insert(0.5, DisplayableId(2), TweenProperty::Scale(1.0), 0.25, Easing::Linear);
        assert_eq!(timeline.duration(), 0.75);
        assert_eq!(timeline.entries_for(DisplayableId(2)).count(), 1);
    }
}
