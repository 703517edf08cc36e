// extensions/mod.rs
//
// Animation side of the layout engine. Reconciliation only emits a
// `Timeline`; playing it back is up to the game, which can use `TweenState`
// or hand the entries to its own animation system.

pub mod easing;
pub mod timeline;
pub mod tween;

pub use easing::{Easing, lerp, ease, ease_vec3};
pub use timeline::{Timeline, TimelineEntry, TweenChannel, TweenProperty};
pub use tween::{TweenState, Tween, TweenId, TweenTarget};
