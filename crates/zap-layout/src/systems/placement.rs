//! Placement system — applies a battle update's object positions to the board.

use crate::api::error::Result;
use crate::api::types::{DisplayableId, SortingKey};
use crate::core::board::LayoutBoard;
use crate::extensions::timeline::Timeline;

/// Where the latest battle state puts one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub id: DisplayableId,
    pub layout: DisplayableId,
    pub sorting_key: SortingKey,
}

/// Move each object into its layout, then reconcile every layout that gained
/// or lost a member, all into the same timeline.
///
/// Layouts nested inside another affected layout are reconciled through
/// their ancestor only, so their members are placed against the ancestor's
/// target frame. A placement that cannot be applied (unregistered object,
/// target that is not a layout, ownership cycle) is skipped with a warning;
/// the rest of the update still goes through and is reconciled.
pub fn apply_placements(
    board: &mut LayoutBoard,
    placements: &[Placement],
    mut timeline: Option<&mut Timeline>,
) -> Result<()> {
    let mut affected: Vec<DisplayableId> = Vec::new();
    let mut touch = |layout: DisplayableId| {
        if !affected.contains(&layout) {
            affected.push(layout);
        }
    };

    for placement in placements {
        if !board.is_layout(placement.layout) {
            log::warn!(
                "placement of {:?} names {:?}, which is not a layout",
                placement.id,
                placement.layout
            );
            continue;
        }
        let previous = board.owner(placement.id);
        if let Err(err) = board.add(placement.layout, placement.id) {
            log::warn!("skipping placement of {:?}: {}", placement.id, err);
            continue;
        }
        board.set_sorting_key(placement.id, placement.sorting_key)?;
        if let Some(previous) = previous {
            touch(previous);
        }
        touch(placement.layout);
    }

    let roots: Vec<DisplayableId> = affected
        .iter()
        .copied()
        .filter(|&layout| !affected.iter().any(|&other| board.has_ancestor(layout, other)))
        .collect();

    for layout in roots {
        board.apply_layout(layout, timeline.as_deref_mut())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::displayable::Displayable;
    use crate::extensions::timeline::TweenProperty;
    use crate::layout::kind::LayoutKind;
    use crate::layout::object_layout::ObjectLayout;
    use glam::Vec3;

    const HAND: DisplayableId = DisplayableId(1);
    const VOID: DisplayableId = DisplayableId(2);

    fn board() -> LayoutBoard {
        let mut board = LayoutBoard::new();
        board.spawn_layout(Displayable::new(HAND), ObjectLayout::new(LayoutKind::row(Vec3::X)));
        board.spawn_layout(
            Displayable::new(VOID).with_position(Vec3::new(0.0, 0.0, 10.0)),
            ObjectLayout::new(LayoutKind::stack(Vec3::Y * 0.1)),
        );
        for id in 10..13 {
            board.spawn(Displayable::new(DisplayableId(id)));
        }
        board
    }

    fn place(id: u32, layout: DisplayableId, sorting_key: SortingKey) -> Placement {
        Placement { id: DisplayableId(id), layout, sorting_key }
    }

    #[test]
    fn places_and_reconciles_in_one_timeline() {
        let mut board = board();
        apply_placements(
            &mut board,
            &[place(10, HAND, 2), place(11, HAND, 1), place(12, VOID, 0)],
            None,
        )
        .unwrap();
        assert_eq!(board.objects(HAND).unwrap(), &[DisplayableId(11), DisplayableId(10)]);
        assert_eq!(board.get(DisplayableId(10)).unwrap().position(), Vec3::X);
        assert_eq!(board.get(DisplayableId(12)).unwrap().position(), Vec3::new(0.0, 0.0, 10.0));

        // Discard 11: the hand closes the gap, the void stacks it on top.
        let mut timeline = Timeline::new();
        apply_placements(&mut board, &[place(11, VOID, 1)], Some(&mut timeline)).unwrap();
        let moved: Vec<DisplayableId> = timeline
            .entries()
            .iter()
            .filter(|e| matches!(e.property, TweenProperty::Position(_)))
            .map(|e| e.target)
            .collect();
        assert!(moved.contains(&DisplayableId(10)));
        assert!(moved.contains(&DisplayableId(11)));
        assert!(!moved.contains(&DisplayableId(12)));
    }

    #[test]
    fn unknown_layout_is_skipped() {
        let mut board = board();
        apply_placements(&mut board, &[place(10, DisplayableId(10), 0), place(11, HAND, 0)], None)
            .unwrap();
        assert_eq!(board.owner(DisplayableId(10)), None);
        assert_eq!(board.owner(DisplayableId(11)), Some(HAND));
    }

    #[test]
    fn bad_placements_do_not_block_the_rest() {
        let mut board = board();
        board.get_mut(DisplayableId(10)).unwrap().transform.position = Vec3::splat(9.0);
        board.add(HAND, VOID).unwrap();

        // 99 is unregistered; putting the hand inside the void would be a cycle.
        apply_placements(
            &mut board,
            &[place(10, HAND, 3), place(99, HAND, 0), place(1, VOID, 0)],
            None,
        )
        .unwrap();

        assert_eq!(board.owner(DisplayableId(10)), Some(HAND));
        assert_eq!(board.owner(HAND), None);
        assert_eq!(board.objects(HAND).unwrap(), &[VOID, DisplayableId(10)]);
        assert_eq!(board.get(DisplayableId(10)).unwrap().position(), Vec3::X);
    }

    #[test]
    fn nested_layouts_reconcile_through_ancestor() {
        let mut board = board();
        board.add(HAND, VOID).unwrap();
        board.get_mut(DisplayableId(12)).unwrap().transform.position = Vec3::splat(5.0);
        let mut timeline = Timeline::new();
        apply_placements(&mut board, &[place(12, VOID, 0), place(11, HAND, 5)], Some(&mut timeline))
            .unwrap();

        // The void is heading to slot 0 of the hand, so card 12 targets the origin.
        let targets: Vec<Vec3> = timeline
            .entries_for(DisplayableId(12))
            .filter_map(|e| match e.property {
                TweenProperty::Position(p) => Some(p),
                _ => None,
            })
            .collect();
        assert_eq!(targets, vec![Vec3::ZERO]);
    }
}
