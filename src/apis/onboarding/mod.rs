//! APIs and models related to customer onboarding and documents.

mod api;
mod model;

pub use api::OnboardingApi;
pub use model::*;
