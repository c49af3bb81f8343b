mod screens;
mod styles;
mod ui_config;
mod ui_text;
mod utils;

pub(crate) use screens::{
    ConfirmAction, LandingAction, PaymentAction, StatusAction, render_confirm, render_landing,
    render_payment, render_status,
};

pub(crate) use styles::{DirectionColor, UiStyleExt};

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use utils::{centered_column, setup_custom_visuals};
