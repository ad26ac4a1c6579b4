// Copyright 2026 the Bargrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark store and frame diffing.
//!
//! Chart code regenerates its full mark list every render; the scene turns
//! that into an enter/update/exit stream against the previous frame so hosts
//! only commit what changed.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkShape};

/// One change between the previous frame and the current one.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark that did not exist in the previous frame.
    Enter {
        /// The mark id.
        id: MarkId,
        /// Paint order of the entering mark.
        z_index: i32,
        /// The drawable content.
        shape: MarkShape,
        /// Intrinsic bounds, where the shape has them.
        bounds: Option<Rect>,
    },
    /// A mark whose z-index or shape changed.
    Update {
        /// The mark id.
        id: MarkId,
        /// Paint order after the update.
        z_index: i32,
        /// The drawable content after the update.
        shape: MarkShape,
        /// Intrinsic bounds after the update, where the shape has them.
        bounds: Option<Rect>,
    },
    /// A mark present in the previous frame but absent from this one.
    Exit {
        /// The mark id.
        id: MarkId,
    },
}

/// A retained mark store.
///
/// `Scene` owns the marks of the most recent frame. Each [`Scene::tick`]
/// replaces that frame and reports the difference.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the retained mark for `id`, if present.
    pub fn mark(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Returns the number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Replaces the retained frame with `frame` and returns the diff.
    ///
    /// If `frame` contains duplicate ids the last occurrence wins. Diffs are
    /// ordered deterministically: enters and updates sorted by
    /// `(z_index, id)`, then exits sorted by id.
    pub fn tick(&mut self, frame: Vec<Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, Mark> = HashMap::with_capacity(frame.len());
        for mark in frame {
            next.insert(mark.id, mark);
        }

        let mut changed: Vec<&Mark> = Vec::new();
        for mark in next.values() {
            match self.marks.get(&mark.id) {
                Some(prev) if prev == mark => {}
                _ => changed.push(mark),
            }
        }
        changed.sort_by_key(|m| (m.z_index, m.id));

        let mut out: Vec<MarkDiff> = Vec::with_capacity(changed.len());
        for mark in changed {
            let bounds = mark.bounds();
            if self.marks.contains_key(&mark.id) {
                out.push(MarkDiff::Update {
                    id: mark.id,
                    z_index: mark.z_index,
                    shape: mark.shape.clone(),
                    bounds,
                });
            } else {
                out.push(MarkDiff::Enter {
                    id: mark.id,
                    z_index: mark.z_index,
                    shape: mark.shape.clone(),
                    bounds,
                });
            }
        }

        let mut exits: Vec<MarkId> = self
            .marks
            .keys()
            .copied()
            .filter(|id| !next.contains_key(id))
            .collect();
        exits.sort_unstable();
        out.extend(exits.into_iter().map(|id| MarkDiff::Exit { id }));

        self.marks = next;
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::Rect;
    use peniko::Brush;

    use super::*;
    use crate::mark::RectShape;

    fn rect_mark(id: u64, x0: f64) -> Mark {
        Mark::new(
            MarkId::from_raw(id),
            0,
            MarkShape::Rect(RectShape {
                rect: Rect::new(x0, 0.0, x0 + 10.0, 10.0),
                fill: Brush::default(),
            }),
        )
    }

    #[test]
    fn first_tick_enters_everything() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 20.0)]);
        assert_eq!(diffs.len(), 2);
        assert!(
            diffs
                .iter()
                .all(|d| matches!(d, MarkDiff::Enter { .. })),
            "expected only enters on the first frame"
        );
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn unchanged_marks_produce_no_diffs() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0)]);
        let diffs = scene.tick(vec![rect_mark(1, 0.0)]);
        assert!(diffs.is_empty(), "identical frame should diff to nothing");
    }

    #[test]
    fn moved_mark_updates_and_missing_mark_exits() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 20.0)]);
        let diffs = scene.tick(vec![rect_mark(1, 5.0)]);

        assert_eq!(diffs.len(), 2);
        match &diffs[0] {
            MarkDiff::Update { id, bounds, .. } => {
                assert_eq!(*id, MarkId::from_raw(1));
                assert_eq!(*bounds, Some(Rect::new(5.0, 0.0, 15.0, 10.0)));
            }
            other => panic!("expected Update first, got {other:?}"),
        }
        assert_eq!(diffs[1], MarkDiff::Exit { id: MarkId::from_raw(2) });
    }

    #[test]
    fn diffs_are_ordered_by_z_then_id() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![
            rect_mark(3, 0.0).with_z_index(10),
            rect_mark(1, 0.0).with_z_index(-5),
            rect_mark(2, 0.0).with_z_index(-5),
        ]);
        let ids: Vec<u64> = diffs
            .iter()
            .map(|d| match d {
                MarkDiff::Enter { id, .. } => id.0,
                _ => panic!("expected enters"),
            })
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn duplicate_ids_last_one_wins() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, 0.0), rect_mark(1, 40.0)]);
        let kept = scene.mark(MarkId::from_raw(1)).expect("retained mark");
        assert_eq!(
            kept.bounds(),
            Some(Rect::new(40.0, 0.0, 50.0, 10.0)),
            "the later duplicate should be retained"
        );
    }
}
