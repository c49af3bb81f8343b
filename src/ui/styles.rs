use {
    crate::{
        domain::TradeDirection,
        ui::{UI_CONFIG, UI_TEXT, ui_text::ICON_COPY},
    },
    eframe::egui::{
        Align, Button, Color32, CornerRadius, Layout, Response, RichText, Ui, Vec2,
    },
};

pub trait DirectionColor {
    fn color(&self) -> Color32;
}

impl DirectionColor for TradeDirection {
    fn color(&self) -> Color32 {
        match self {
            Self::Buy => UI_CONFIG.colors.buy,
            Self::Sell => UI_CONFIG.colors.sell,
        }
    }
}

pub(crate) trait UiStyleExt {
    fn label_subdued(&mut self, text: impl Into<String>);
    fn label_heading(&mut self, text: impl Into<String>, size: f32);
    /// `label ........ value` on one line.
    fn summary_row(&mut self, label: &str, value: impl Into<RichText>);
    /// Full-width call to action. Disabled buttons stay visible but inert.
    fn primary_button(&mut self, text: &str, enabled: bool) -> Response;
    fn link_button(&mut self, text: &str) -> Response;
    /// Small copy-to-clipboard button; briefly shows a confirmation after a click.
    fn copy_button(&mut self, id_salt: &str, value: &str);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.subdued));
    }

    fn label_heading(&mut self, text: impl Into<String>, size: f32) {
        self.label(
            RichText::new(text)
                .size(size)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }

    fn summary_row(&mut self, label: &str, value: impl Into<RichText>) {
        let value = value.into();
        self.horizontal(|ui| {
            ui.label_subdued(label);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(value);
            });
        });
    }

    fn primary_button(&mut self, text: &str, enabled: bool) -> Response {
        let fill = if enabled {
            UI_CONFIG.colors.primary
        } else {
            UI_CONFIG.colors.primary.linear_multiply(0.35)
        };
        let button = Button::new(RichText::new(text).strong().size(16.0).color(Color32::BLACK))
            .fill(fill)
            .corner_radius(CornerRadius::same(12))
            .min_size(Vec2::new(self.available_width(), 44.0));
        self.add_enabled(enabled, button)
    }

    fn link_button(&mut self, text: &str) -> Response {
        self.add(
            Button::new(RichText::new(text).color(UI_CONFIG.colors.primary)).frame(false),
        )
    }

    fn copy_button(&mut self, id_salt: &str, value: &str) {
        let id = self.make_persistent_id(id_salt);
        let copied = self.data(|d| d.get_temp::<bool>(id).unwrap_or(false));
        let label = if copied {
            UI_TEXT.copied.as_str()
        } else {
            ICON_COPY
        };
        let response = self.add(Button::new(RichText::new(label).small()).frame(false));
        if response.clicked() {
            self.ctx().copy_text(value.to_string());
            self.data_mut(|d| d.insert_temp(id, true));
        }
        if copied && !response.hovered() {
            self.data_mut(|d| d.remove_temp::<bool>(id));
        }
    }
}
