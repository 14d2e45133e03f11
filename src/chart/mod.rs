//! Historical price chart core. No egui in here: everything is plain data
//! so it can be derived once per input change and tested without a window.

pub mod extrema;
pub mod formatter;
pub mod model;
pub mod period_selector;

pub use extrema::{
    DecorationStyle, ExtremaLabel, PointDecoration, decorate, label_for, should_enlarge,
};
pub use formatter::{format_axis_price, format_axis_timestamp, format_tooltip};
pub use model::{Annotation, AxisTick, ChartModel, ChartStyle, sample_ticks};
pub use period_selector::{PeriodChange, PeriodChip, PeriodSelector};
