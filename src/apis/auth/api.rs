use crate::{
    apis::{auth::AccessToken, BanklyClientInner},
    Error,
};
use std::sync::Arc;

/// Bankly authentication API client.
#[derive(Debug, Clone)]
pub struct AuthApi {
    inner: Arc<BanklyClientInner>,
}

impl AuthApi {
    pub(crate) fn new(inner: Arc<BanklyClientInner>) -> Self {
        Self { inner }
    }

    /// Returns the current [`AccessToken`](crate::apis::auth::AccessToken) used to authenticate to the Bankly APIs.
    /// If the client is not authenticated yet, or the cached token expires in less than 15 minutes,
    /// a new authentication request using the configured credentials will be fired.
    pub async fn get_access_token(&self) -> Result<AccessToken, Error> {
        self.inner.token_cache.ensure_valid_token().await
    }

    /// Requests a new access token even if the cached one is still valid.
    ///
    /// If the request fails the previously cached token, if any, is kept.
    pub async fn refresh_access_token(&self) -> Result<AccessToken, Error> {
        self.inner.token_cache.refresh().await
    }
}
