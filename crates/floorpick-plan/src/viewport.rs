//! Viewport to model coordinate mapping.
//!
//! Converts pointer coordinates (viewport space) into floor-plan coordinates
//! (model space) and back. The rendered element's bounding rectangle carries
//! the current zoom and pan, so the mapper itself holds no view state.

use std::fmt;

use crate::geometry::{ElementRect, ModelDimensions, ModelPoint, ViewportPoint};

/// Converts viewport coordinates to model coordinates.
///
/// The transformation is linear and independent per axis:
///
/// ```text
/// scale_x = model_width  / rect_width
/// scale_y = model_height / rect_height
/// model_x = (viewport_x - rect_left) * scale_x
/// model_y = (viewport_y - rect_top)  * scale_y
/// ```
///
/// Rotation and skew are not supported. Returns `None` when either the
/// rectangle or the model dimensions are degenerate.
pub fn to_model_space(
    point: ViewportPoint,
    rect: &ElementRect,
    model: &ModelDimensions,
) -> Option<ModelPoint> {
    let (scale_x, scale_y) = scale(rect, model)?;
    Some(ModelPoint::new(
        (point.x - rect.left) * scale_x,
        (point.y - rect.top) * scale_y,
    ))
}

/// Converts model coordinates to viewport coordinates.
///
/// Exact inverse of [`to_model_space`]; only used to place a marker for an
/// existing selection.
///
/// ```text
/// viewport_x = rect_left + model_x * rect_width  / model_width
/// viewport_y = rect_top  + model_y * rect_height / model_height
/// ```
pub fn to_viewport_space(
    point: ModelPoint,
    rect: &ElementRect,
    model: &ModelDimensions,
) -> Option<ViewportPoint> {
    let (scale_x, scale_y) = scale(rect, model)?;
    Some(ViewportPoint::new(
        rect.left + point.x / scale_x,
        rect.top + point.y / scale_y,
    ))
}

/// Model units per viewport pixel on each axis.
pub fn scale(rect: &ElementRect, model: &ModelDimensions) -> Option<(f64, f64)> {
    if !rect.is_valid() || !model.is_valid() {
        return None;
    }
    Some((model.width / rect.width, model.height / rect.height))
}

/// Coordinate mapper bound to one floor plan's model dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    model: ModelDimensions,
}

impl CoordinateMapper {
    /// Creates a mapper for a plan of the given logical size.
    pub fn new(model: ModelDimensions) -> Self {
        Self { model }
    }

    /// Gets the model dimensions.
    pub fn model_dimensions(&self) -> ModelDimensions {
        self.model
    }

    /// Converts a pointer position to model space for the element as
    /// currently rendered.
    pub fn to_model_space(&self, point: ViewportPoint, rect: &ElementRect) -> Option<ModelPoint> {
        let mapped = to_model_space(point, rect, &self.model);
        if mapped.is_none() {
            tracing::warn!("Cannot map {} through degenerate element rect {}", point, rect);
        }
        mapped
    }

    /// Converts a model point to where it is drawn inside `rect`.
    pub fn to_viewport_space(&self, point: ModelPoint, rect: &ElementRect) -> Option<ViewportPoint> {
        to_viewport_space(point, rect, &self.model)
    }

    /// Gets the per-axis scale (model units per pixel) for `rect`.
    pub fn scale(&self, rect: &ElementRect) -> Option<(f64, f64)> {
        scale(rect, &self.model)
    }
}

impl fmt::Display for CoordinateMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Model: {:.2}x{:.2}", self.model.width, self.model.height)
    }
}
