//! APIs and models related to fund transfers.

mod api;
mod model;

pub use api::TransfersApi;
pub use model::*;
