//! APIs and models related to account events.

mod api;
mod model;

pub use api::EventsApi;
pub use model::*;
