//! Item row measurement.
//!
//! Positions are taken from client rects and made relative to the row
//! container, which gives the same numbers as `offsetLeft`/`offsetWidth`
//! for the absolutely positioned indicators living in that container.

use std::rc::Rc;

use dioxus::prelude::*;
use futures::future::join_all;

use crate::domain::models::IndicatorGeometry;
use crate::domain::services::MeasuredLayout;
use crate::shared::errors::{NavbarError, Result};
use crate::shared::logging::{log_layout_measured, log_measure_error};

/// Geometry of one item relative to the left edge of the row
pub async fn measure_item(
    index: usize,
    item: Option<&Rc<MountedData>>,
    row_left: f64,
) -> Result<IndicatorGeometry> {
    let item = item.ok_or(NavbarError::Unmeasured(index))?;
    let rect = item
        .get_client_rect()
        .await
        .map_err(|e| NavbarError::Measurement(format!("{:?}", e)))?;

    Ok(IndicatorGeometry::new(rect.origin.x - row_left, rect.size.width))
}

/// Live reading of a single item, taken against a fresh row rect
pub async fn measure_in_row(
    index: usize,
    container: Option<Rc<MountedData>>,
    item: Option<Rc<MountedData>>,
) -> Result<IndicatorGeometry> {
    let container = container.ok_or(NavbarError::Unmeasured(index))?;
    let row = container
        .get_client_rect()
        .await
        .map_err(|e| NavbarError::Measurement(format!("{:?}", e)))?;

    measure_item(index, item.as_ref(), row.origin.x).await
}

/// Measure every item concurrently. Items that cannot be measured come
/// back as `None` and are retried on the next pass.
pub async fn measure_row(
    container: Option<Rc<MountedData>>,
    items: Vec<Option<Rc<MountedData>>>,
) -> MeasuredLayout {
    let unmeasured = MeasuredLayout::new(vec![None; items.len()]);

    let Some(container) = container else {
        return unmeasured;
    };
    let row_left = match container.get_client_rect().await {
        Ok(rect) => rect.origin.x,
        Err(e) => {
            tracing::debug!("Item row not measurable yet: {:?}", e);
            return unmeasured;
        }
    };

    let results = join_all(
        items
            .iter()
            .enumerate()
            .map(|(index, item)| measure_item(index, item.as_ref(), row_left)),
    )
    .await;

    let geometries: Vec<Option<IndicatorGeometry>> = results
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(geometry) => Some(geometry),
            Err(NavbarError::Unmeasured(_)) => None,
            Err(e) => {
                log_measure_error(index, &e.to_string());
                None
            }
        })
        .collect();

    let layout = MeasuredLayout::new(geometries);
    log_layout_measured(layout.measured_count(), items.len());
    layout
}
