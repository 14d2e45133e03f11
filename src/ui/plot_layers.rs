use eframe::egui::{Align2, Color32, RichText, Stroke};

use egui_plot::{Line, MarkerShape, PlotPoint, PlotPoints, PlotUi, Points, Polygon, Text};

use crate::chart::ChartModel;
use crate::config::plot::PLOT_CONFIG;
use crate::domain::PricePoint;

/// Context passed to every layer during rendering.
pub struct LayerContext<'a> {
    pub model: &'a ChartModel,
    /// Point nearest to the pointer while the plot is hovered
    pub hovered: Option<&'a PricePoint>,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. AREA LAYER (filled region under the price line)
// ============================================================================
pub struct AreaLayer;

impl PlotLayer for AreaLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some((baseline, _)) = ctx.model.y_bounds else {
            return;
        };
        let coords = ctx.model.coordinates();
        let fill = PLOT_CONFIG
            .area_fill_color
            .linear_multiply(PLOT_CONFIG.area_fill_opacity_pct);

        // One quad per segment keeps every polygon convex
        for pair in coords.windows(2) {
            let [x0, y0] = pair[0];
            let [x1, y1] = pair[1];
            plot_ui.polygon(
                Polygon::new(
                    "",
                    PlotPoints::new(vec![[x0, baseline], [x0, y0], [x1, y1], [x1, baseline]]),
                )
                .fill_color(fill)
                .stroke(Stroke::NONE),
            );
        }

        plot_ui.line(
            Line::new("", PlotPoints::new(coords))
                .color(PLOT_CONFIG.area_stroke_color)
                .width(PLOT_CONFIG.area_line_width),
        );
    }
}

// ============================================================================
// 2. EXTREMA MARKERS (enlarged dots on the Low/High points)
// ============================================================================
pub struct ExtremaMarkerLayer;

impl PlotLayer for ExtremaMarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for annotation in &ctx.model.annotations {
            let deco = &annotation.decoration;
            plot_ui.points(
                Points::new("", PlotPoints::new(vec![deco.position]))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(deco.radius)
                    .color(PLOT_CONFIG.extrema_marker_color),
            );
        }
    }
}

// ============================================================================
// 3. EXTREMA LABELS ("Low: $10.00" above the marker)
// ============================================================================
pub struct ExtremaLabelLayer;

impl PlotLayer for ExtremaLabelLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        for annotation in &ctx.model.annotations {
            let [x, y] = annotation.decoration.label_position;
            plot_ui.text(
                Text::new(
                    "",
                    PlotPoint::new(x, y),
                    RichText::new(&annotation.text)
                        .size(12.0)
                        .strong()
                        .color(PLOT_CONFIG.extrema_label_color),
                )
                .anchor(Align2::CENTER_BOTTOM),
            );
        }
    }
}

// ============================================================================
// 4. ACTIVE DOT (follows the pointer)
// ============================================================================
pub struct ActiveDotLayer;

impl PlotLayer for ActiveDotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let Some(point) = ctx.hovered else {
            return;
        };
        plot_ui.points(
            Points::new(
                "",
                PlotPoints::new(vec![[point.timestamp as f64, point.price]]),
            )
            .shape(MarkerShape::Circle)
            .filled(true)
            .radius(PLOT_CONFIG.active_marker_radius)
            .color(Color32::WHITE),
        );
    }
}
