use {
    crate::ui::{
        UI_CONFIG, UI_TEXT, UiStyleExt, centered_column,
        ui_text::ICON_DOT,
    },
    eframe::egui::{
        Align, CentralPanel, Context, Layout, RichText, ScrollArea, TopBottomPanel, Ui,
    },
};

/// Brand bar shown on every screen.
pub(crate) fn render_header(ctx: &Context) {
    TopBottomPanel::top("header")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| {
            centered_column(ui, UI_CONFIG.layout.max_content_width, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.brand)
                            .size(22.0)
                            .strong()
                            .color(UI_CONFIG.colors.primary),
                    );
                    ui.label_subdued(&UI_TEXT.brand_tagline);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(&UI_TEXT.brand_online).color(UI_CONFIG.colors.label));
                        ui.label(RichText::new(ICON_DOT).small().color(UI_CONFIG.colors.success));
                    });
                });
            });
        });
}

/// Header plus a scrolling central column of at most `max_width`.
pub(crate) fn page<R>(
    ctx: &Context,
    max_width: f32,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> R {
    render_header(ctx);
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    centered_column(ui, max_width, |ui| {
                        ui.add_space(24.0);
                        let inner = add_contents(ui);
                        ui.add_space(UI_CONFIG.layout.section_gap);
                        inner
                    })
                })
                .inner
        })
        .inner
}

pub(crate) fn section_title(ui: &mut Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label_heading(text, 26.0);
    });
    ui.add_space(16.0);
}

/// Lay out `count` cells in rows of `per_row` equal columns.
pub(crate) fn card_grid(
    ui: &mut Ui,
    count: usize,
    per_row: usize,
    mut add_cell: impl FnMut(&mut Ui, usize),
) {
    let per_row = per_row.max(1);
    for start in (0..count).step_by(per_row) {
        let end = (start + per_row).min(count);
        ui.columns(per_row, |cols| {
            for (col, idx) in cols.iter_mut().zip(start..end) {
                add_cell(col, idx);
            }
        });
        ui.add_space(12.0);
    }
}

pub(crate) fn render_footer(ui: &mut Ui) {
    ui.separator();
    ui.add_space(16.0);
    ui.columns(2, |cols| {
        let ui = &mut cols[0];
        ui.label(
            RichText::new(&UI_TEXT.brand)
                .size(20.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.label_subdued(&UI_TEXT.footer_lead);
        ui.label(RichText::new(&UI_TEXT.footer_body).small().color(UI_CONFIG.colors.subdued));

        let ui = &mut cols[1];
        ui.label(RichText::new(&UI_TEXT.footer_contacts).strong().color(UI_CONFIG.colors.heading));
        for (label, url) in UI_TEXT.contacts {
            ui.hyperlink_to(*label, *url);
        }
    });
    ui.add_space(16.0);
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label_subdued(&UI_TEXT.footer_copyright);
    });
}
