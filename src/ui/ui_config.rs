use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub card: Color32,
    pub card_selected_border: Color32,
    pub link: Color32,
}

#[derive(Clone, Copy)]
pub struct RankStyle {
    pub label: &'static str,
    pub color: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Badge styles for ranks 1..=5. Anything lower falls back to `#N` in gray.
    pub ranks: [RankStyle; 5],
    pub coin_card_width: f32,
    pub coin_icon_size: f32,
    pub detail_icon_size: f32,
    pub rank_avatar_radius: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::WHITE,  // Sets every heading
        subsection_heading: Color32::from_rgb(144, 202, 249),
        central_panel: Color32::from_rgb(18, 18, 18),
        card: Color32::from_rgb(33, 33, 33),
        card_selected_border: Color32::from_rgb(66, 165, 245),
        link: Color32::from_rgb(144, 202, 249),
    },
    ranks: [
        RankStyle {
            label: "1st",
            color: Color32::from_rgb(255, 193, 7), // gold
        },
        RankStyle {
            label: "2nd",
            color: Color32::from_rgb(189, 189, 189), // silver
        },
        RankStyle {
            label: "3rd",
            color: Color32::from_rgb(205, 127, 50), // bronze
        },
        RankStyle {
            label: "4th",
            color: Color32::from_rgb(100, 181, 246),
        },
        RankStyle {
            label: "5th",
            color: Color32::from_rgb(129, 199, 132),
        },
    ],
    coin_card_width: 220.0,
    coin_icon_size: 40.0,
    detail_icon_size: 72.0,
    rank_avatar_radius: 22.0,
};

impl UiConfig {
    pub fn rank_label(&self, rank: u32) -> String {
        match self.rank_style(rank) {
            Some(style) => style.label.to_string(),
            None => format!("#{}", rank),
        }
    }

    pub fn rank_color(&self, rank: u32) -> Color32 {
        self.rank_style(rank)
            .map(|style| style.color)
            .unwrap_or(Color32::GRAY)
    }

    fn rank_style(&self, rank: u32) -> Option<&RankStyle> {
        let index = usize::try_from(rank).ok()?.checked_sub(1)?;
        self.ranks.get(index)
    }

    // Frame for the whole dashboard
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Frame for coin cards, the detail card and item cards
    pub fn card_frame(&self, is_selected: bool) -> Frame {
        let stroke = if is_selected {
            Stroke::new(2.0, self.colors.card_selected_border)
        } else {
            Stroke::NONE
        };
        Frame {
            fill: self.colors.card,
            stroke,
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(8),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_five_ranks_have_named_badges() {
        assert_eq!(UI_CONFIG.rank_label(1), "1st");
        assert_eq!(UI_CONFIG.rank_label(5), "5th");
        assert_eq!(UI_CONFIG.rank_color(3), Color32::from_rgb(205, 127, 50));
    }

    #[test]
    fn other_ranks_fall_back_to_number() {
        assert_eq!(UI_CONFIG.rank_label(6), "#6");
        assert_eq!(UI_CONFIG.rank_label(0), "#0");
        assert_eq!(UI_CONFIG.rank_color(42), Color32::GRAY);
    }
}
