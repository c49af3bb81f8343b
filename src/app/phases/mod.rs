pub(super) mod confirm;
pub(super) mod landing;
pub(super) mod payment;
pub(super) mod phase_view;
pub(super) mod status;

pub(crate) use phase_view::PhaseView;
