use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub primary: Color32,
    pub background: Color32,
    pub card: Color32,
    pub card_highlight: Color32,
    pub border: Color32,
    pub buy: Color32,
    pub sell: Color32,
    pub error: Color32,
    pub success: Color32,
}

#[derive(Clone, Copy)]
pub struct UiLayout {
    /// Content column width on wide windows.
    pub max_content_width: f32,
    /// Below this the landing page stacks its columns.
    pub two_column_min_width: f32,
    pub section_gap: f32,
    pub card_radius: u8,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub layout: UiLayout,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(200, 206, 214),
        heading: Color32::WHITE,
        subdued: Color32::from_rgb(130, 138, 150),
        primary: Color32::from_rgb(34, 197, 170),
        background: Color32::from_rgb(11, 14, 20),
        card: Color32::from_rgb(21, 26, 35),
        card_highlight: Color32::from_rgb(24, 48, 48),
        border: Color32::from_rgb(40, 48, 60),
        buy: Color32::from_rgb(74, 222, 128),
        sell: Color32::from_rgb(248, 113, 113),
        error: Color32::from_rgb(248, 113, 113),
        success: Color32::from_rgb(74, 222, 128),
    },
    layout: UiLayout {
        max_content_width: 1100.0,
        two_column_min_width: 820.0,
        section_gap: 40.0,
        card_radius: 16,
    },
};

impl UiConfig {
    /// Rounded panel used for every content block.
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.border),
            inner_margin: Margin::same(20),
            corner_radius: CornerRadius::same(self.layout.card_radius),
            ..Default::default()
        }
    }

    /// Inner block inside a card (summaries, the card number).
    pub fn inset_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(10),
            ..Default::default()
        }
    }

    /// Newest live trade row.
    pub fn highlight_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card_highlight,
            stroke: Stroke::new(1.0, self.colors.primary.linear_multiply(0.4)),
            inner_margin: Margin::symmetric(12, 8),
            corner_radius: CornerRadius::same(10),
            ..Default::default()
        }
    }

    pub fn row_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            corner_radius: CornerRadius::same(10),
            ..Default::default()
        }
    }

    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 10),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.background,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 0),
            ..Default::default()
        }
    }
}
