//! Active/hover indicator targets.
//!
//! Turns a [`SelectionState`] plus the measured item layout into the geometry
//! the two springs should head for. Measurement is abstracted behind
//! [`ItemLayout`] so the rules can be exercised without a DOM.

use crate::domain::models::{HoverTarget, IndicatorGeometry, SelectionState};

/// Source of item positions inside the item row
pub trait ItemLayout {
    /// `None` when the item is not mounted/measurable yet
    fn measure(&self, index: usize) -> Option<IndicatorGeometry>;
}

/// Snapshot of measured item positions, indexed like the item list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasuredLayout {
    pub items: Vec<Option<IndicatorGeometry>>,
}

impl MeasuredLayout {
    pub fn new(items: Vec<Option<IndicatorGeometry>>) -> Self {
        Self { items }
    }

    pub fn measured_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_some()).count()
    }

    /// Store a fresh reading for one item. Returns `false` when nothing
    /// changed, so callers can avoid waking subscribers.
    pub fn record(&mut self, index: usize, geometry: IndicatorGeometry) -> bool {
        if index >= self.items.len() {
            self.items.resize(index + 1, None);
        }
        let slot = &mut self.items[index];
        if *slot == Some(geometry) {
            return false;
        }
        *slot = Some(geometry);
        true
    }
}

impl ItemLayout for MeasuredLayout {
    fn measure(&self, index: usize) -> Option<IndicatorGeometry> {
        self.items.get(index).copied().flatten()
    }
}

/// Outcome of a sync pass, for logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncOutcome {
    Updated(IndicatorGeometry),
    FollowingActive,
    Skipped(usize),
    Unchanged,
}

/// Geometry the indicators are heading for
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorTargets {
    pub active: Option<IndicatorGeometry>,
    pub hover: HoverTarget,
}

impl IndicatorTargets {
    /// Re-measure the active item. Leaves the target alone if it cannot be
    /// measured; a later layout pass will retry.
    pub fn sync_active(&mut self, selection: &SelectionState, layout: &impl ItemLayout) -> SyncOutcome {
        let Some(index) = selection.active_index else {
            return SyncOutcome::Unchanged;
        };
        match layout.measure(index) {
            Some(geometry) => {
                self.active = Some(geometry);
                SyncOutcome::Updated(geometry)
            }
            None => SyncOutcome::Skipped(index),
        }
    }

    /// Re-measure the hovered item, or fall back to following the active one
    pub fn sync_hover(&mut self, selection: &SelectionState, layout: &impl ItemLayout) -> SyncOutcome {
        match selection.hovered_index {
            Some(index) => match layout.measure(index) {
                Some(geometry) => {
                    self.hover = HoverTarget::Item(geometry);
                    SyncOutcome::Updated(geometry)
                }
                None => SyncOutcome::Skipped(index),
            },
            None => {
                self.hover = HoverTarget::FollowActive;
                SyncOutcome::FollowingActive
            }
        }
    }

    pub fn active_geometry(&self) -> Option<IndicatorGeometry> {
        self.active
    }

    /// Hover pill geometry after applying the fallback rule
    pub fn hover_geometry(&self) -> Option<IndicatorGeometry> {
        self.hover.resolve(self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five buttons laid out left to right, 8px gap
    fn row() -> MeasuredLayout {
        MeasuredLayout::new(vec![
            Some(IndicatorGeometry::new(8.0, 70.0)),
            Some(IndicatorGeometry::new(86.0, 92.0)),
            Some(IndicatorGeometry::new(186.0, 100.0)),
            Some(IndicatorGeometry::new(294.0, 66.0)),
            Some(IndicatorGeometry::new(368.0, 72.0)),
        ])
    }

    fn sync(targets: &mut IndicatorTargets, selection: &SelectionState, layout: &MeasuredLayout) {
        targets.sync_active(selection, layout);
        targets.sync_hover(selection, layout);
    }

    #[test]
    fn test_mount_measures_first_item() {
        let layout = row();
        let selection = SelectionState::default();
        let mut targets = IndicatorTargets::default();

        sync(&mut targets, &selection, &layout);

        assert_eq!(targets.active_geometry(), layout.items[0]);
        assert_eq!(targets.hover_geometry(), layout.items[0]);
    }

    #[test]
    fn test_click_moves_active_indicator() {
        let layout = row();
        let mut selection = SelectionState::default();
        let mut targets = IndicatorTargets::default();
        sync(&mut targets, &selection, &layout);

        selection.select(3);
        let outcome = targets.sync_active(&selection, &layout);

        assert_eq!(outcome, SyncOutcome::Updated(IndicatorGeometry::new(294.0, 66.0)));
        assert_eq!(targets.active_geometry(), layout.items[3]);
    }

    #[test]
    fn test_hover_then_leave_restores_active_geometry() {
        let layout = row();
        let mut selection = SelectionState::default();
        let mut targets = IndicatorTargets::default();
        sync(&mut targets, &selection, &layout);

        selection.select(1);
        targets.sync_active(&selection, &layout);

        selection.hover(4);
        targets.sync_hover(&selection, &layout);
        assert_eq!(targets.hover_geometry(), layout.items[4]);
        assert_eq!(selection.hover_opacity(), 1.0);

        selection.leave();
        let outcome = targets.sync_hover(&selection, &layout);
        assert_eq!(outcome, SyncOutcome::FollowingActive);
        assert_eq!(targets.hover_geometry(), layout.items[1]);
        assert_eq!(selection.hover_opacity(), 0.0);
    }

    #[test]
    fn test_fallback_tracks_later_active_changes() {
        let layout = row();
        let mut selection = SelectionState::default();
        let mut targets = IndicatorTargets::default();
        sync(&mut targets, &selection, &layout);

        selection.select(2);
        targets.sync_active(&selection, &layout);
        assert_eq!(targets.hover_geometry(), layout.items[2]);
    }

    #[test]
    fn test_unmeasured_item_is_skipped() {
        let mut layout = row();
        layout.items[2] = None;
        let mut selection = SelectionState::default();
        let mut targets = IndicatorTargets::default();
        sync(&mut targets, &selection, &layout);

        selection.select(2);
        assert_eq!(targets.sync_active(&selection, &layout), SyncOutcome::Skipped(2));
        assert_eq!(targets.active_geometry(), row().items[0]);

        selection.hover(2);
        assert_eq!(targets.sync_hover(&selection, &layout), SyncOutcome::Skipped(2));
        assert_eq!(targets.hover, HoverTarget::FollowActive);
    }

    #[test]
    fn test_retry_after_layout_arrives() {
        let empty = MeasuredLayout::new(vec![None; 5]);
        let selection = SelectionState::default();
        let mut targets = IndicatorTargets::default();

        sync(&mut targets, &selection, &empty);
        assert_eq!(targets.active_geometry(), None);
        assert_eq!(targets.hover_geometry(), None);

        let layout = row();
        sync(&mut targets, &selection, &layout);
        assert_eq!(targets.active_geometry(), layout.items[0]);
    }

    #[test]
    fn test_skipped_item_measured_on_next_selection() {
        let mut layout = row();
        layout.items[2] = None;
        let mut selection = SelectionState::default();
        let mut targets = IndicatorTargets::default();
        sync(&mut targets, &selection, &layout);

        selection.select(2);
        assert_eq!(targets.sync_active(&selection, &layout), SyncOutcome::Skipped(2));

        // Click-time reading lands for item 2
        let fresh = IndicatorGeometry::new(186.0, 104.0);
        assert!(layout.record(2, fresh));
        assert_eq!(targets.sync_active(&selection, &layout), SyncOutcome::Updated(fresh));
        assert_eq!(targets.active_geometry(), Some(fresh));

        selection.hover(2);
        assert_eq!(targets.sync_hover(&selection, &layout), SyncOutcome::Updated(fresh));
    }

    #[test]
    fn test_record_replaces_stale_width() {
        let mut layout = row();
        let mut selection = SelectionState::default();
        let mut targets = IndicatorTargets::default();
        sync(&mut targets, &selection, &layout);

        // Font swap widened item 1 without the row resizing
        let wider = IndicatorGeometry::new(86.0, 110.0);
        assert!(layout.record(1, wider));
        assert!(!layout.record(1, wider));

        selection.select(1);
        targets.sync_active(&selection, &layout);
        assert_eq!(targets.active_geometry(), Some(wider));
    }

    #[test]
    fn test_record_grows_short_layout() {
        let mut layout = MeasuredLayout::default();
        assert!(layout.record(3, IndicatorGeometry::new(294.0, 66.0)));
        assert_eq!(layout.items.len(), 4);
        assert_eq!(layout.measured_count(), 1);
        assert_eq!(layout.measure(0), None);
    }

    #[test]
    fn test_out_of_range_index_is_unmeasurable() {
        let layout = row();
        assert_eq!(layout.measure(42), None);
        assert_eq!(layout.measured_count(), 5);
    }

    #[test]
    fn test_no_active_selection_leaves_target() {
        let layout = row();
        let selection = SelectionState {
            active_index: None,
            hovered_index: None,
        };
        let mut targets = IndicatorTargets::default();
        assert_eq!(targets.sync_active(&selection, &layout), SyncOutcome::Unchanged);
        assert_eq!(targets.active_geometry(), None);
    }
}
