use crate::token_cache::TokenCache;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject the access token into outgoing HTTP requests.
///
/// The token is resolved before the request is forwarded, so a request is never sent
/// with a token that has not been checked against the refresh margin.
pub struct AuthenticationMiddleware {
    pub(crate) token_cache: TokenCache,
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let access_token = self.token_cache.ensure_valid_token().await?;

        let mut header_value = HeaderValue::from_str(&access_token.authorization())
            .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?;
        header_value.set_sensitive(true);
        req.headers_mut().insert(AUTHORIZATION, header_value);

        next.run(req, extensions).await
    }
}
