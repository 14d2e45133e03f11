//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- AREA SERIES ---
    pub area_stroke_color: Color32,
    pub area_fill_color: Color32,
    /// Opacity of the filled area under the price line (0.0 = invisible, 1.0 = fully opaque)
    pub area_fill_opacity_pct: f32,
    pub area_line_width: f32,

    // --- MARKERS ---
    /// Radius of the enlarged Low/High markers
    pub extrema_marker_radius: f32,
    /// Radius of the dot drawn under the pointer
    pub active_marker_radius: f32,
    pub extrema_marker_color: Color32,
    pub extrema_label_color: Color32,
    /// Vertical offset of Low/High labels above their marker, as a fraction of the visible Y span
    pub extrema_label_offset_pct: f64,

    // --- AXES ---
    /// X axis tick count (start and end always included)
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    /// Synthetic Y span for flat series, as a fraction of the price
    pub flat_series_span_pct: f64,

    // --- LAYOUT ---
    pub chart_height: f32,
    /// Share of the available width given to the plot (rest is breathing room)
    pub chart_width_pct: f32,

    // --- SEMANTIC COLORS ---
    pub color_gain: Color32,
    pub color_loss: Color32,
    pub color_text_subdued: Color32,

    // UI WIDGET STYLES
    pub color_widget_border: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    area_stroke_color: Color32::from_rgb(144, 202, 249), // Light blue line
    area_fill_color: Color32::from_rgb(66, 165, 245),
    area_fill_opacity_pct: 0.5,
    area_line_width: 2.0,

    extrema_marker_radius: 10.0,
    active_marker_radius: 8.0,
    extrema_marker_color: Color32::from_rgb(144, 202, 249),
    extrema_label_color: Color32::WHITE,
    extrema_label_offset_pct: 0.03,

    x_tick_count: 10,
    y_tick_count: 6,
    plot_y_padding_pct: 0.1,
    flat_series_span_pct: 0.05,

    chart_height: 500.0,
    chart_width_pct: 0.9,

    color_gain: Color32::from_rgb(100, 255, 100),
    color_loss: Color32::from_rgb(255, 80, 80),
    color_text_subdued: Color32::GRAY,

    color_widget_border: Color32::from_gray(60),
};
