//! Active/hover indicator state for the item row

use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::domain::models::SelectionState;
use crate::domain::services::{IndicatorTargets, MeasuredLayout, SyncOutcome};
use crate::shared::errors::NavbarError;
use crate::shared::logging::{
    IndicatorKind, log_hover_fallback, log_indicator_target, log_measure_error,
    log_measure_skipped,
};
use crate::shared::services::{measure_in_row, measure_row};

#[derive(Clone, Copy, PartialEq)]
pub struct UseIndicators {
    pub selection: Signal<SelectionState>,
    pub targets: Signal<IndicatorTargets>,
    pub layout: Signal<MeasuredLayout>,
    items: Signal<Vec<Option<Rc<MountedData>>>>,
    container: Signal<Option<Rc<MountedData>>>,
    layout_epoch: Signal<u64>,
}

impl UseIndicators {
    /// Click
    pub fn select(&mut self, index: usize) {
        self.selection.write().select(index);
    }

    /// Pointer enter
    pub fn hover(&mut self, index: usize) {
        self.selection.write().hover(index);
    }

    /// Pointer leave
    pub fn leave(&mut self) {
        self.selection.write().leave();
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.selection.read().is_active(index)
    }

    pub fn hover_opacity(&self) -> f64 {
        self.selection.read().hover_opacity()
    }

    pub fn item_mounted(&mut self, index: usize, element: Rc<MountedData>) {
        let mut items = self.items.write();
        if index >= items.len() {
            items.resize(index + 1, None);
        }
        items[index] = Some(element);
    }

    pub fn container_mounted(&mut self, element: Rc<MountedData>) {
        self.container.set(Some(element));
    }

    /// Ask for a fresh measurement (row resized, fonts loaded, ...)
    pub fn remeasure(&mut self) {
        *self.layout_epoch.write() += 1;
    }
}

pub fn use_indicators(item_count: usize) -> UseIndicators {
    let selection = use_signal(SelectionState::default);
    let mut targets = use_signal(IndicatorTargets::default);
    let mut layout = use_signal(MeasuredLayout::default);
    let items = use_signal(|| vec![None::<Rc<MountedData>>; item_count]);
    let container = use_signal(|| None::<Rc<MountedData>>);
    let layout_epoch = use_signal(|| 0u64);
    let mut measuring = use_signal(|| None::<Task>);
    let active_reading = use_signal(|| None::<Task>);
    let hover_reading = use_signal(|| None::<Task>);

    let active_index = use_memo(move || selection.read().active_index);
    let hovered_index = use_memo(move || selection.read().hovered_index);

    // Re-read the row whenever an element mounts or a remeasure is requested
    use_effect(move || {
        let _ = layout_epoch();
        let container = container.read().clone();
        let items = items.read().clone();

        if let Some(task) = measuring.take() {
            task.cancel();
        }
        measuring.set(Some(spawn(async move {
            let measured = measure_row(container, items).await;
            layout.set(measured);
        })));
    });

    // Each selection change reads its item live; the sync effects below pick
    // the new reading up through `layout`
    use_effect(move || read_item(active_index(), container, items, layout, active_reading));
    use_effect(move || read_item(hovered_index(), container, items, layout, hover_reading));

    use_effect(move || {
        let index = active_index();
        let layout = layout.read();
        let selection = *selection.peek();
        let outcome = targets.write().sync_active(&selection, &*layout);
        log_outcome(IndicatorKind::Active, index, outcome);
    });

    use_effect(move || {
        let index = hovered_index();
        let layout = layout.read();
        let selection = *selection.peek();
        let outcome = targets.write().sync_hover(&selection, &*layout);
        log_outcome(IndicatorKind::Hover, index, outcome);
    });

    UseIndicators {
        selection,
        targets,
        layout,
        items,
        container,
        layout_epoch,
    }
}

/// Measure one item and store the result. Failures leave the cached entry
/// alone, so a permanently unmeasurable item does not trigger another pass.
fn read_item(
    index: Option<usize>,
    container: Signal<Option<Rc<MountedData>>>,
    items: Signal<Vec<Option<Rc<MountedData>>>>,
    mut layout: Signal<MeasuredLayout>,
    mut reading: Signal<Option<Task>>,
) {
    if let Some(task) = reading.take() {
        task.cancel();
    }
    let Some(index) = index else {
        return;
    };

    let container = container.peek().clone();
    let item = items.peek().get(index).cloned().flatten();

    reading.set(Some(spawn(async move {
        match measure_in_row(index, container, item).await {
            Ok(geometry) => {
                if layout.peek().items.get(index).copied().flatten() != Some(geometry) {
                    layout.write().record(index, geometry);
                }
            }
            Err(NavbarError::Unmeasured(_)) => {}
            Err(e) => log_measure_error(index, &e.to_string()),
        }
    })));
}

fn log_outcome(kind: IndicatorKind, index: Option<usize>, outcome: SyncOutcome) {
    match (outcome, index) {
        (SyncOutcome::Updated(geometry), Some(index)) => log_indicator_target(kind, index, &geometry),
        (SyncOutcome::Skipped(index), _) => log_measure_skipped(kind, index),
        (SyncOutcome::FollowingActive, _) => log_hover_fallback(),
        _ => {}
    }
}
