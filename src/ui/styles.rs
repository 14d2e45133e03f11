use {
    crate::{
        config::PLOT_CONFIG,
        ui::UI_CONFIG,
        utils::format_pct_change,
    },
    eframe::egui::{
        Align2, Color32, CornerRadius, FontId, Response, RichText, Sense, Stroke, StrokeKind, Ui,
        Vec2, WidgetInfo, WidgetType,
    },
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub fn get_change_color(value: f64) -> Color32 {
    if value >= 0.0 {
        PLOT_CONFIG.color_gain
    } else {
        PLOT_CONFIG.color_loss
    }
}

pub(crate) trait UiStyleExt {
    /// Pill-shaped toggle: gray when idle, lighter on hover, selection blue when active.
    fn chip(&mut self, text: &str, is_selected: bool) -> Response;
    /// Chip that looks like a link and shows `url` on hover.
    fn link_chip(&mut self, text: &str, url: &str) -> Response;
    /// `1h +0.35%`, tinted by sign
    fn price_change_chip(&mut self, period_label: &str, change_pct: f64);
    /// Small titled value box used on the detail card.
    fn item_card(&mut self, title: &str, value: &str);
    /// Filled circle with the rank badge text inside.
    fn rank_avatar(&mut self, rank: u32) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_subheader(&mut self, text: impl Into<String>);
}

impl UiStyleExt for Ui {
    fn chip(&mut self, text: &str, is_selected: bool) -> Response {
        let padding = Vec2::new(10.0, 5.0);
        let galley =
            self.painter()
                .layout_no_wrap(text.to_string(), FontId::proportional(13.0), Color32::WHITE);
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));

        if self.is_rect_visible(rect) {
            let visuals = self.style().visuals.clone();
            let (bg_fill, text_color) = if is_selected {
                (visuals.selection.bg_fill, Color32::WHITE)
            } else if response.hovered() || response.has_focus() {
                (visuals.widgets.hovered.bg_fill, Color32::WHITE)
            } else {
                (visuals.widgets.inactive.weak_bg_fill, UI_CONFIG.colors.label)
            };

            self.painter().rect(
                rect,
                CornerRadius::same(u8::MAX),
                bg_fill,
                Stroke::NONE,
                StrokeKind::Inside,
            );
            let text_pos = rect.left_top() + padding;
            self.painter().galley(text_pos, galley, text_color);
        }
        response
    }

    fn link_chip(&mut self, text: &str, url: &str) -> Response {
        let padding = Vec2::new(10.0, 5.0);
        let galley = self.painter().layout_no_wrap(
            text.to_string(),
            FontId::proportional(13.0),
            UI_CONFIG.colors.link,
        );
        let desired_size = galley.size() + padding * 2.0;
        let (rect, response) = self.allocate_exact_size(desired_size, Sense::click());
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Link, true, text));

        if self.is_rect_visible(rect) {
            let stroke_color = if response.hovered() {
                UI_CONFIG.colors.link
            } else {
                PLOT_CONFIG.color_widget_border
            };
            self.painter().rect(
                rect,
                CornerRadius::same(u8::MAX),
                Color32::TRANSPARENT,
                Stroke::new(1.0, stroke_color),
                StrokeKind::Inside,
            );
            self.painter()
                .galley(rect.left_top() + padding, galley, UI_CONFIG.colors.link);
        }
        response.on_hover_text(url)
    }

    fn price_change_chip(&mut self, period_label: &str, change_pct: f64) {
        let color = get_change_color(change_pct);
        self.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            ui.label_subdued(period_label);
            ui.label(RichText::new(format_pct_change(change_pct)).strong().color(color));
        });
    }

    fn item_card(&mut self, title: &str, value: &str) {
        UI_CONFIG.card_frame(false).show(self, |ui| {
            ui.set_min_width(160.0);
            ui.vertical(|ui| {
                ui.label_subdued(title);
                ui.label(RichText::new(value).strong().color(UI_CONFIG.colors.heading));
            });
        });
    }

    fn rank_avatar(&mut self, rank: u32) -> Response {
        let radius = UI_CONFIG.rank_avatar_radius;
        let (rect, response) = self.allocate_exact_size(Vec2::splat(radius * 2.0), Sense::hover());
        if self.is_rect_visible(rect) {
            let painter = self.painter();
            painter.circle_filled(rect.center(), radius, UI_CONFIG.rank_color(rank));
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                UI_CONFIG.rank_label(rank),
                FontId::proportional(13.0),
                Color32::BLACK,
            );
        }
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(PLOT_CONFIG.color_text_subdued));
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }
}
