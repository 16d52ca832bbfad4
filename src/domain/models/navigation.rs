use serde::{Deserialize, Serialize};

/// A label in the bottom item row. Order is fixed once the bar is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub index: usize,
    pub label: String,
}

impl NavItem {
    /// Build the ordered item list from plain labels
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Vec<NavItem> {
        labels
            .iter()
            .enumerate()
            .map(|(index, label)| NavItem {
                index,
                label: label.as_ref().to_string(),
            })
            .collect()
    }
}

/// Horizontal placement of an indicator, relative to the item row
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorGeometry {
    pub left: f64,
    pub width: f64,
}

impl IndicatorGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }
}

/// Where the hover pill should sit.
///
/// `FollowActive` is the fallback used while nothing is hovered: the pill
/// tracks the active indicator so that the next hover starts from there.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum HoverTarget {
    Item(IndicatorGeometry),
    #[default]
    FollowActive,
}

impl HoverTarget {
    /// Resolve against the current active geometry
    pub fn resolve(&self, active: Option<IndicatorGeometry>) -> Option<IndicatorGeometry> {
        match self {
            HoverTarget::Item(geometry) => Some(*geometry),
            HoverTarget::FollowActive => active,
        }
    }
}

/// Which item is clicked and which one is under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    pub active_index: Option<usize>,
    pub hovered_index: Option<usize>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            active_index: Some(0),
            hovered_index: None,
        }
    }
}

impl SelectionState {
    /// Click: exactly one active item
    pub fn select(&mut self, index: usize) {
        self.active_index = Some(index);
    }

    /// Pointer enter
    pub fn hover(&mut self, index: usize) {
        self.hovered_index = Some(index);
    }

    /// Pointer leave
    pub fn leave(&mut self) {
        self.hovered_index = None;
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == Some(index)
    }

    /// Hover pill opacity. Discrete on purpose: never animated.
    pub fn hover_opacity(&self) -> f64 {
        if self.hovered_index.is_some() { 1.0 } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_starts_on_first_item() {
        let state = SelectionState::default();
        assert_eq!(state.active_index, Some(0));
        assert_eq!(state.hovered_index, None);
        assert!(state.is_active(0));
    }

    #[test]
    fn test_select_replaces_previous_active() {
        let mut state = SelectionState::default();
        state.select(3);
        state.select(5);
        assert!(state.is_active(5));
        assert!(!state.is_active(3));
        assert!(!state.is_active(0));
    }

    #[test]
    fn test_hover_opacity_is_binary() {
        let mut state = SelectionState::default();
        assert_eq!(state.hover_opacity(), 0.0);

        state.hover(2);
        assert_eq!(state.hover_opacity(), 1.0);

        state.leave();
        assert_eq!(state.hover_opacity(), 0.0);
        assert_eq!(state.hovered_index, None);
    }

    #[test]
    fn test_hover_does_not_touch_active() {
        let mut state = SelectionState::default();
        state.select(1);
        state.hover(4);
        state.leave();
        assert_eq!(state.active_index, Some(1));
    }

    #[test]
    fn test_hover_target_falls_back_to_active() {
        let active = Some(IndicatorGeometry::new(12.0, 80.0));
        assert_eq!(HoverTarget::FollowActive.resolve(active), active);
        assert_eq!(HoverTarget::FollowActive.resolve(None), None);

        let hovered = IndicatorGeometry::new(100.0, 64.0);
        assert_eq!(HoverTarget::Item(hovered).resolve(active), Some(hovered));
    }

    #[test]
    fn test_nav_items_keep_label_order() {
        let items = NavItem::from_labels(&["Projects", "Usage", "Settings"]);
        assert_eq!(items.len(), 3);
        assert_eq!(items[1].index, 1);
        assert_eq!(items[1].label, "Usage");
        assert_eq!(items[2].label, "Settings");
    }
}
