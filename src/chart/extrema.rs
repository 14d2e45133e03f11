//! Low/High decoration of chart points.
//!
//! A point is matched against the caller's extrema by exact equality. Nothing
//! here computes a min or max of its own.

use crate::domain::{Extrema, PricePoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtremaLabel {
    #[default]
    None,
    Low,
    High,
}

impl ExtremaLabel {
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Low => Some("Low"),
            Self::High => Some("High"),
        }
    }
}

pub fn should_enlarge(point: &PricePoint, extrema: &Extrema) -> bool {
    point.price == extrema.min || point.price == extrema.max
}

/// `Low` is checked first, so a flat series (min == max) is all `Low`.
pub fn label_for(point: &PricePoint, extrema: &Extrema) -> ExtremaLabel {
    if point.price == extrema.min {
        ExtremaLabel::Low
    } else if point.price == extrema.max {
        ExtremaLabel::High
    } else {
        ExtremaLabel::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationStyle {
    pub marker_radius: f32,
    /// Plot units between a marker and its label
    pub label_offset: f64,
}

/// Marker and label placement for one annotated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDecoration {
    pub position: [f64; 2],
    pub radius: f32,
    pub label: ExtremaLabel,
    pub label_position: [f64; 2],
}

pub fn decorate(
    point: &PricePoint,
    extrema: &Extrema,
    style: &DecorationStyle,
) -> Option<PointDecoration> {
    if !should_enlarge(point, extrema) {
        return None;
    }
    let x = point.timestamp as f64;
    Some(PointDecoration {
        position: [x, point.price],
        radius: style.marker_radius,
        label: label_for(point, extrema),
        label_position: [x, point.price + style.label_offset],
    })
}
