// Step-to-step rules of the exchange flow, independent of rendering
mod route;
mod views;

pub use {
    route::Route,
    views::{
        ConfirmForm, ConfirmView, PaymentView, StatusView, can_proceed, start_exchange,
        start_new_exchange,
    },
};
