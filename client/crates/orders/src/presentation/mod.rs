//! Presentation Layer
//!
//! View bindings for the admin orders page.

pub mod details_view;
pub mod status_form;

pub use details_view::{OrderDetailsView, status_options};
pub use status_form::OrderStatusForm;
