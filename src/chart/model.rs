//! Render-ready derivation of a price series.
//!
//! `ChartModel::build` does all the data shaping (coordinates, ticks, Y domain,
//! Low/High decorations, tooltip text) so the egui side only has to draw.

use crate::{
    chart::{
        extrema::{DecorationStyle, PointDecoration, decorate},
        formatter::{format_axis_price, format_axis_timestamp, format_tooltip},
    },
    config::{CurrencyFormatter, PLOT_CONFIG},
    domain::{Currency, Extrema, PricePoint, is_chronological},
    utils::is_representable,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub y_padding_pct: f64,
    pub flat_span_pct: f64,
    pub marker_radius: f32,
    pub label_offset_pct: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            x_tick_count: PLOT_CONFIG.x_tick_count,
            y_tick_count: PLOT_CONFIG.y_tick_count,
            y_padding_pct: PLOT_CONFIG.plot_y_padding_pct,
            flat_span_pct: PLOT_CONFIG.flat_series_span_pct,
            marker_radius: PLOT_CONFIG.extrema_marker_radius,
            label_offset_pct: PLOT_CONFIG.extrema_label_offset_pct,
        }
    }
}

/// A decorated point together with its inline text (`Low: $10.00`).
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub decoration: PointDecoration,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartModel {
    /// Plottable points, in series order
    pub points: Vec<PricePoint>,
    /// Tooltip text, parallel to `points`
    pub tooltips: Vec<String>,
    pub x_bounds: Option<(f64, f64)>,
    pub y_bounds: Option<(f64, f64)>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub annotations: Vec<Annotation>,
    /// Points dropped because of a non-finite price or unrepresentable timestamp
    pub skipped: usize,
}

impl ChartModel {
    pub fn build(
        series: &[PricePoint],
        extrema: Option<&Extrema>,
        currency: Currency,
        formatter: &dyn CurrencyFormatter,
        style: &ChartStyle,
    ) -> Self {
        let points: Vec<PricePoint> = series
            .iter()
            .filter(|p| p.price.is_finite() && is_representable(p.timestamp))
            .copied()
            .collect();
        let skipped = series.len() - points.len();
        if skipped > 0 {
            log::warn!("Chart: skipped {} malformed point(s) out of {}", skipped, series.len());
        }
        if !is_chronological(&points) {
            log::warn!("Chart: series is not in ascending time order");
        }

        let Some(first) = points.first() else {
            return Self {
                skipped,
                ..Self::default()
            };
        };

        // Time domain is dataMin..dataMax
        let (x_min, x_max) = points.iter().fold(
            (first.timestamp, first.timestamp),
            |(lo, hi), p| (lo.min(p.timestamp), hi.max(p.timestamp)),
        );
        let x_ticks = time_ticks(x_min, x_max, style.x_tick_count);

        let (y_lo, y_hi) = y_domain(&points, style);
        let y_ticks = sample_ticks(y_lo, y_hi, style.y_tick_count)
            .into_iter()
            .map(|value| AxisTick {
                value,
                label: format_axis_price(formatter, currency, value),
            })
            .collect();

        let annotations = match extrema {
            Some(extrema) => {
                let deco_style = DecorationStyle {
                    marker_radius: style.marker_radius,
                    label_offset: (y_hi - y_lo) * style.label_offset_pct,
                };
                points
                    .iter()
                    .filter_map(|p| decorate(p, extrema, &deco_style))
                    .map(|decoration| Annotation {
                        text: annotation_text(&decoration, formatter, currency),
                        decoration,
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        let tooltips = points
            .iter()
            .map(|p| format_tooltip(formatter, currency, p))
            .collect();

        Self {
            points,
            tooltips,
            x_bounds: Some((x_min as f64, x_max as f64)),
            y_bounds: Some((y_lo, y_hi)),
            x_ticks,
            y_ticks,
            annotations,
            skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [p.timestamp as f64, p.price])
            .collect()
    }

    /// Index of the point closest in time to `x`.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        if !x.is_finite() {
            return None;
        }
        self.points
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (a.timestamp as f64 - x).abs();
                let db = (b.timestamp as f64 - x).abs();
                da.total_cmp(&db)
            })
            .map(|(i, _)| i)
    }

    pub fn nearest(&self, x: f64) -> Option<&PricePoint> {
        self.nearest_index(x).map(|i| &self.points[i])
    }

    pub fn tooltip_at(&self, x: f64) -> Option<&str> {
        self.nearest_index(x).map(|i| self.tooltips[i].as_str())
    }
}

fn annotation_text(
    decoration: &PointDecoration,
    formatter: &dyn CurrencyFormatter,
    currency: Currency,
) -> String {
    let price = format_axis_price(formatter, currency, decoration.position[1]);
    match decoration.label.prefix() {
        Some(prefix) => format!("{}: {}", prefix, price),
        None => price,
    }
}

/// Y range over the plotted prices, padded on both ends. The caller's extrema
/// only drive annotation, so a point outside them still stays on the plot.
/// A flat range gets a synthetic span so the line sits in the middle.
fn y_domain(points: &[PricePoint], style: &ChartStyle) -> (f64, f64) {
    let Some(data) = Extrema::of(points) else {
        return (0.0, 1.0);
    };
    let (min, max) = (data.min, data.max);

    let span = if data.is_flat() {
        (max.abs() * style.flat_span_pct).max(1e-8)
    } else {
        max - min
    };
    let pad = span * style.y_padding_pct;
    let lower = min - pad;
    // Prices are never negative, no point showing below zero
    let lower = if min >= 0.0 { lower.max(0.0) } else { lower };
    let upper = max + pad;
    if upper - lower <= f64::EPSILON {
        (lower - span / 2.0, upper + span / 2.0)
    } else {
        (lower, upper)
    }
}

/// `count` evenly spaced values from `min` to `max`, both ends included.
pub fn sample_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if count == 1 || max <= min {
        return vec![min];
    }
    let step = (max - min) / (count - 1) as f64;
    (0..count)
        .map(|i| if i == count - 1 { max } else { min + step * i as f64 })
        .collect()
}

/// Evenly sampled dates across the data range; not every point gets a label.
fn time_ticks(x_min: i64, x_max: i64, count: usize) -> Vec<AxisTick> {
    let mut stamps: Vec<i64> = sample_ticks(x_min as f64, x_max as f64, count)
        .into_iter()
        .map(|v| v.round() as i64)
        .collect();
    stamps.dedup();
    stamps
        .into_iter()
        .map(|t| AxisTick {
            value: t as f64,
            label: format_axis_timestamp(t),
        })
        .collect()
}
