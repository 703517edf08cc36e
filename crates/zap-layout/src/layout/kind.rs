//! Per-variant target calculators.
//!
//! Every calculator maps `(index, count)` to a target relative to the
//! layout's frame origin. All of them accept `index = 0, count = 0`, which is
//! how a spawn position is computed for an entity that has no slot yet.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Target computed for one slot of a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetTransform {
    /// Offset from the layout's frame origin.
    pub position: Vec3,
    /// `None` leaves the member's rotation alone.
    pub rotation: Option<Vec3>,
    /// `None` falls back to the member's default scale.
    pub scale: Option<f32>,
}

/// The closed set of layout shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutKind {
    /// Every member sits at the same point (offscreen, hidden-within-card).
    Fixed {
        #[serde(default)]
        position: Vec3,
        #[serde(default)]
        rotation: Option<Vec3>,
        #[serde(default)]
        scale: Option<f32>,
    },
    /// Members spaced evenly along `spacing`, optionally centred on the origin.
    Row {
        spacing: Vec3,
        #[serde(default)]
        centered: bool,
        #[serde(default)]
        rotation: Option<Vec3>,
        #[serde(default)]
        scale: Option<f32>,
    },
    /// A pile: each member offset from the previous one by `step`.
    Stack {
        step: Vec3,
        #[serde(default)]
        rotation: Option<Vec3>,
        #[serde(default)]
        scale: Option<f32>,
    },
    /// A hand of cards spread along an arc of `radius` in the XY plane.
    /// The arc widens by `per_item_degrees` per card up to `max_arc_degrees`.
    Fan {
        radius: f32,
        per_item_degrees: f32,
        max_arc_degrees: f32,
        #[serde(default)]
        scale: Option<f32>,
    },
    /// Row-major grid on the XZ plane, rows advancing towards -Z.
    Grid {
        columns: usize,
        cell: Vec2,
        #[serde(default)]
        scale: Option<f32>,
    },
}

impl LayoutKind {
    /// A non-centred row stepping `spacing` per member.
    pub fn row(spacing: Vec3) -> Self {
        LayoutKind::Row { spacing, centered: false, rotation: None, scale: None }
    }

    pub fn stack(step: Vec3) -> Self {
        LayoutKind::Stack { step, rotation: None, scale: None }
    }

    pub fn fixed(position: Vec3) -> Self {
        LayoutKind::Fixed { position, rotation: None, scale: None }
    }

    pub fn target(&self, index: usize, count: usize) -> TargetTransform {
        TargetTransform {
            position: self.position(index, count),
            rotation: self.rotation(index, count),
            scale: self.scale(index, count),
        }
    }

    pub fn position(&self, index: usize, count: usize) -> Vec3 {
        match self {
            LayoutKind::Fixed { position, .. } => *position,
            LayoutKind::Row { spacing, centered, .. } => {
                let offset = if *centered && count > 0 {
                    (count - 1) as f32 / 2.0
                } else {
                    0.0
                };
                *spacing * (index as f32 - offset)
            }
            LayoutKind::Stack { step, .. } => *step * index as f32,
            LayoutKind::Fan { radius, .. } => {
                let theta = self.fan_angle(index, count).to_radians();
                Vec3::new(radius * theta.sin(), radius * (theta.cos() - 1.0), 0.0)
            }
            LayoutKind::Grid { columns, cell, .. } => {
                let columns = (*columns).max(1);
                let col = (index % columns) as f32;
                let row = (index / columns) as f32;
                Vec3::new(col * cell.x, 0.0, -row * cell.y)
            }
        }
    }

    pub fn rotation(&self, index: usize, count: usize) -> Option<Vec3> {
        match self {
            LayoutKind::Fixed { rotation, .. }
            | LayoutKind::Row { rotation, .. }
            | LayoutKind::Stack { rotation, .. } => *rotation,
            // Cards lean outward along the arc.
            LayoutKind::Fan { .. } => Some(Vec3::new(0.0, 0.0, -self.fan_angle(index, count))),
            LayoutKind::Grid { .. } => None,
        }
    }

    pub fn scale(&self, _index: usize, _count: usize) -> Option<f32> {
        match self {
            LayoutKind::Fixed { scale, .. }
            | LayoutKind::Row { scale, .. }
            | LayoutKind::Stack { scale, .. }
            | LayoutKind::Fan { scale, .. }
            | LayoutKind::Grid { scale, .. } => *scale,
        }
    }

    /// Angle in degrees of slot `index` from the fan's centre line; positive to the right.
    fn fan_angle(&self, index: usize, count: usize) -> f32 {
        let LayoutKind::Fan { per_item_degrees, max_arc_degrees, .. } = self else {
            return 0.0;
        };
        if count <= 1 {
            return 0.0;
        }
        let arc = (per_item_degrees * (count - 1) as f32).min(*max_arc_degrees);
        -arc / 2.0 + arc * index as f32 / (count - 1) as f32
    }
}
