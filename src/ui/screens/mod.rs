mod confirm;
mod landing;
mod payment;
mod shared;
mod status;

pub(crate) use {
    confirm::{ConfirmAction, render_confirm},
    landing::{LandingAction, render_landing},
    payment::{PaymentAction, render_payment},
    status::{StatusAction, render_status},
};
