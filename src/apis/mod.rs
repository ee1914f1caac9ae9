//! Clients for the various Bankly APIs.

use crate::{executor::RequestExecutor, token_cache::TokenCache};

pub mod accounts;
pub mod auth;
pub mod events;
pub mod onboarding;
pub mod transfers;

#[derive(Debug)]
pub(crate) struct BanklyClientInner {
    pub(crate) executor: RequestExecutor,
    pub(crate) token_cache: TokenCache,
}
