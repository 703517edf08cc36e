//! Reconciliation: walk a layout tree, compute each member's target and
//! either snap it there or describe the move in a shared timeline.

use glam::Vec3;

use crate::api::error::{LayoutError, Result};
use crate::api::types::DisplayableId;
use crate::core::board::LayoutBoard;
use crate::extensions::timeline::{Timeline, TweenProperty};
use crate::layout::equivalence::is_equivalent;
use crate::layout::kind::LayoutKind;

impl LayoutBoard {
    /// Move every member of `layout` to its target.
    ///
    /// With a timeline, each change is inserted at offset 0 so the whole
    /// subtree moves in parallel; without one, transforms are written
    /// immediately. Members already at their target are skipped.
    pub fn apply_layout(&mut self, layout: DisplayableId, timeline: Option<&mut Timeline>) -> Result<()> {
        let frame = self.frame_origin(layout)?;
        self.apply_layout_in_frame(layout, frame, timeline)
    }

    /// Give `target` the transform it would have as the last member of
    /// `layout`, without requiring it to be a member. Used for spawn and
    /// exit positions around an add or remove.
    pub fn apply_target_transform(
        &mut self,
        layout: DisplayableId,
        target: DisplayableId,
        timeline: Option<&mut Timeline>,
    ) -> Result<()> {
        let frame = self.frame_origin(layout)?;
        if self.get(target).is_none() {
            return Err(LayoutError::InvalidArgument(target));
        }
        let state = self.layout_state(layout)?;
        let count = state.len();
        let kind = state.kind().clone();
        self.apply_to_object(&kind, target, count.saturating_sub(1), count, frame, timeline)
    }

    /// Position member targets are offset from when `layout` is reconciled
    /// on its own: wherever the layout currently is.
    fn frame_origin(&self, layout: DisplayableId) -> Result<Vec3> {
        self.layout_state(layout)?;
        self.get(layout)
            .map(|d| d.position())
            .ok_or(LayoutError::InvalidArgument(layout))
    }

    fn apply_layout_in_frame(
        &mut self,
        layout: DisplayableId,
        frame: Vec3,
        mut timeline: Option<&mut Timeline>,
    ) -> Result<()> {
        let state = self.layout_state(layout)?;
        let kind = state.kind().clone();
        let members = state.objects().to_vec();
        let count = members.len();
        for (index, id) in members.into_iter().enumerate() {
            self.apply_to_object(&kind, id, index, count, frame, timeline.as_deref_mut())?;
        }
        Ok(())
    }

    fn apply_to_object(
        &mut self,
        kind: &LayoutKind,
        id: DisplayableId,
        index: usize,
        count: usize,
        frame: Vec3,
        mut timeline: Option<&mut Timeline>,
    ) -> Result<()> {
        let target = kind.target(index, count);
        let position = frame + target.position;
        let default_scale = self
            .get(id)
            .map(|d| d.default_scale)
            .ok_or(LayoutError::InvalidArgument(id))?;
        let scale = target.scale.unwrap_or(default_scale);

        self.commit(id, position, target.rotation, scale, timeline.as_deref_mut());

        if self.is_layout(id) {
            // Children are placed against where the container is heading,
            // not where it is now, and share its timeline.
            self.apply_layout_in_frame(id, position, timeline)?;
        }
        Ok(())
    }

    fn commit(
        &mut self,
        id: DisplayableId,
        position: Vec3,
        rotation: Option<Vec3>,
        scale: f32,
        timeline: Option<&mut Timeline>,
    ) {
        let config = &self.config;
        let Some(displayable) = self.displayables.get_mut(&id) else {
            return;
        };
        if is_equivalent(&displayable.transform, position, rotation, scale, config) {
            log::trace!("{:?} already at target", id);
            return;
        }

        match timeline {
            Some(timeline) => {
                let (duration, easing) = (config.move_duration, config.easing);
                timeline.insert(0.0, id, TweenProperty::Position(position), duration, easing);
                if let Some(rotation) = rotation {
                    timeline.insert(0.0, id, TweenProperty::Rotation(rotation), duration, easing);
                }
                timeline.insert(0.0, id, TweenProperty::Scale(scale), duration, easing);
                log::trace!("{:?} animating to {:?}", id, position);
            }
            None => {
                let transform = &mut displayable.transform;
                transform.position = position;
                if let Some(rotation) = rotation {
                    transform.rotation = rotation;
                }
                transform.scale = scale;
            }
        }
    }
}
