//! APIs and models related to accounts and balances.

mod api;
mod model;

pub use api::AccountsApi;
pub use model::*;
