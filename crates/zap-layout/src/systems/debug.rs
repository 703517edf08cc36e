//! Debug re-layout — snaps flagged layouts every frame, so calculator
//! parameters can be tuned live.

use crate::api::error::Result;
use crate::core::board::LayoutBoard;

/// Immediately re-apply every layout with `debug_update_continuously` set.
/// Returns how many layouts were applied.
pub fn tick_debug_layouts(board: &mut LayoutBoard) -> Result<usize> {
    let flagged: Vec<_> = board
        .layout_ids()
        .into_iter()
        .filter(|&id| board.layout(id).is_some_and(|l| l.debug_update_continuously))
        .collect();
    for &id in &flagged {
        board.apply_layout(id, None)?;
    }
    Ok(flagged.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::DisplayableId;
    use crate::components::displayable::Displayable;
    use crate::layout::kind::LayoutKind;
    use crate::layout::object_layout::ObjectLayout;
    use glam::Vec3;

    #[test]
    fn only_flagged_layouts_are_applied() {
        let mut board = LayoutBoard::new();
        let mut flagged = ObjectLayout::new(LayoutKind::row(Vec3::X));
        flagged.debug_update_continuously = true;
        board.spawn_layout(Displayable::new(DisplayableId(1)), flagged);
        board.spawn_layout(
            Displayable::new(DisplayableId(2)),
            ObjectLayout::new(LayoutKind::row(Vec3::X)),
        );
        for (id, layout) in [(10, 1), (11, 1), (20, 2), (21, 2)] {
            board.spawn(Displayable::new(DisplayableId(id)).with_sorting_key(id as i64));
            board.add(DisplayableId(layout), DisplayableId(id)).unwrap();
        }

        // Tweak the calculator; only the flagged layout follows.
        board
            .layout_mut(DisplayableId(1))
            .unwrap()
            .set_kind(LayoutKind::row(Vec3::Z));
        assert_eq!(tick_debug_layouts(&mut board).unwrap(), 1);
        assert_eq!(board.get(DisplayableId(11)).unwrap().position(), Vec3::Z);
        assert_eq!(board.get(DisplayableId(21)).unwrap().position(), Vec3::ZERO);
    }
}
