mod chart_view;
mod home;
mod plot_layers;
mod styles;
mod ui_config;
mod ui_text;

pub use chart_view::{ChartInput, ChartView};

pub(crate) use styles::UiStyleExt;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
