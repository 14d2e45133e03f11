//! The historical price chart: area plot, Low/High annotations, hover
//! tooltip and the period chip row underneath.

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    sync::Arc,
};

use eframe::egui::{Align, Layout, Response, Ui, Vec2};
use egui_plot::{Axis, AxisHints, GridInput, GridMark, Plot};

use crate::{
    chart::{AxisTick, ChartModel, ChartStyle, PeriodChange, PeriodSelector},
    config::{CurrencyFormatter, PLOT_CONFIG},
    domain::{Currency, Extrema, Period, PricePoint},
    ui::{
        UI_CONFIG, UI_TEXT, UiStyleExt,
        plot_layers::{
            ActiveDotLayer, AreaLayer, ExtremaLabelLayer, ExtremaMarkerLayer, LayerContext,
            PlotLayer,
        },
    },
};

/// Everything the chart needs for one frame.
pub struct ChartInput<'a> {
    pub series: &'a [PricePoint],
    pub extrema: Option<&'a Extrema>,
    pub active_period: Period,
    pub currency: Currency,
    pub formatter: &'a dyn CurrencyFormatter,
}

struct PlotCache {
    input_hash: u64,
    model: Arc<ChartModel>,
}

#[derive(Default)]
pub struct ChartView {
    cache: Option<PlotCache>,
}

impl ChartView {
    /// Draws the chart and its chip row. Returns the chip click, if any.
    pub fn show(&mut self, ui: &mut Ui, input: &ChartInput) -> Option<PeriodChange> {
        let model = self.model_for(input);

        // An empty series still gets the plot frame, just nothing inside it
        draw_plot(ui, &model);
        if model.is_empty() {
            ui.label_subdued(&UI_TEXT.chart_empty);
        }

        if model.skipped > 0 {
            ui.label_subdued(format!("{} {}", model.skipped, UI_TEXT.chart_skipped_suffix));
        }

        show_period_chips(ui, input.active_period)
    }

    /// Rebuilds the model only when the inputs changed.
    /// The formatter is assumed to be the same table for the life of the view.
    fn model_for(&mut self, input: &ChartInput) -> Arc<ChartModel> {
        let input_hash = hash_input(input);
        if let Some(cache) = &self.cache {
            if cache.input_hash == input_hash {
                return cache.model.clone();
            }
        }

        let model = crate::trace_time!("Rebuild Chart Model", 500, {
            Arc::new(ChartModel::build(
                input.series,
                input.extrema,
                input.currency,
                input.formatter,
                &ChartStyle::default(),
            ))
        });
        self.cache = Some(PlotCache {
            input_hash,
            model: model.clone(),
        });
        model
    }
}

fn hash_input(input: &ChartInput) -> u64 {
    let mut hasher = DefaultHasher::new();
    input.series.len().hash(&mut hasher);
    for point in input.series {
        point.timestamp.hash(&mut hasher);
        point.price.to_bits().hash(&mut hasher);
    }
    input
        .extrema
        .map(|e| (e.min.to_bits(), e.max.to_bits()))
        .hash(&mut hasher);
    input.currency.hash(&mut hasher);
    hasher.finish()
}

/// Chip row for choosing the period. Also shown while loading or after an
/// error so the user can switch away.
pub fn show_period_chips(ui: &mut Ui, active: Period) -> Option<PeriodChange> {
    let selector = PeriodSelector::new(active);
    let mut change = None;

    UI_CONFIG.card_frame(false).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 8.0;
            for chip in selector.chips() {
                if ui.chip(&chip.label, chip.is_active).clicked() {
                    change = Some(selector.select(chip.period));
                }
            }
        });
    });
    change
}

/// Reserves the chart's footprint and centers `content` in it.
pub fn show_placeholder(ui: &mut Ui, content: impl FnOnce(&mut Ui)) {
    let size = Vec2::new(
        ui.available_width() * PLOT_CONFIG.chart_width_pct,
        PLOT_CONFIG.chart_height,
    );
    ui.allocate_ui_with_layout(size, Layout::top_down(Align::Center), |ui| {
        ui.set_min_size(size);
        ui.add_space(size.y * 0.45);
        content(ui);
    });
}

fn draw_plot(ui: &mut Ui, model: &ChartModel) -> Response {
    let x_values: Vec<f64> = model.x_ticks.iter().map(|t| t.value).collect();
    let y_values: Vec<f64> = model.y_ticks.iter().map(|t| t.value).collect();

    let time_axis = AxisHints::new(Axis::X)
        .formatter(move |mark, _range| tick_label(&model.x_ticks, mark.value));
    let price_axis = AxisHints::new(Axis::Y)
        .min_thickness(72.0)
        .formatter(move |mark, _range| tick_label(&model.y_ticks, mark.value));

    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        Plot::new("price_history_plot")
            .height(PLOT_CONFIG.chart_height)
            .width(ui.available_width() * PLOT_CONFIG.chart_width_pct)
            .custom_x_axes(vec![time_axis])
            .custom_y_axes(vec![price_axis])
            .x_grid_spacer(tick_spacer(x_values))
            .y_grid_spacer(tick_spacer(y_values))
            .label_formatter(move |_name, value| {
                model.tooltip_at(value.x).unwrap_or_default().to_string()
            })
            .allow_double_click_reset(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_drag(false)
            .allow_zoom(false)
            .show(ui, |plot_ui| {
                if let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (model.x_bounds, model.y_bounds) {
                    plot_ui.set_plot_bounds_x(x_lo..=x_hi);
                    plot_ui.set_plot_bounds_y(y_lo..=y_hi);
                }

                let hovered = if plot_ui.response().hovered() {
                    plot_ui
                        .pointer_coordinate()
                        .and_then(|pointer| model.nearest(pointer.x))
                } else {
                    None
                };

                let ctx = LayerContext { model, hovered };
                let layers: [&dyn PlotLayer; 4] = [
                    &AreaLayer,
                    &ExtremaMarkerLayer,
                    &ExtremaLabelLayer,
                    &ActiveDotLayer,
                ];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }
            })
            .response
    })
    .inner
}

fn tick_spacer(values: Vec<f64>) -> impl Fn(GridInput) -> Vec<GridMark> {
    move |_input| grid_marks(&values)
}

/// Grid marks exactly at the precomputed ticks.
fn grid_marks(values: &[f64]) -> Vec<GridMark> {
    let step = values
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .filter(|d| *d > 0.0)
        .fold(f64::INFINITY, f64::min);
    let step_size = if step.is_finite() { step } else { 1.0 };
    values
        .iter()
        .map(|&value| GridMark { value, step_size })
        .collect()
}

/// Label of the tick at `value`, or empty when egui asks about anything else.
fn tick_label(ticks: &[AxisTick], value: f64) -> String {
    ticks
        .iter()
        .find(|t| (t.value - value).abs() <= 1e-9 * t.value.abs().max(1.0))
        .map(|t| t.label.clone())
        .unwrap_or_default()
}
