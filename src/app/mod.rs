mod phases;
mod root;
mod state;

#[cfg(target_arch = "wasm32")]
mod web_route;

pub(crate) use phases::PhaseView;
pub(crate) use state::{ConfirmState, LandingState, PaymentState, Screen, StatusState};

pub use root::App;
