use crate::common::{API_VERSION, API_VERSION_HEADER, CORRELATION_ID_HEADER};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, USER_AGENT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;
use uuid::Uuid;

/// Middleware to inject the headers shared by all outgoing requests.
///
/// Every request gets a `User-Agent`. Requests to the banking APIs additionally get
/// the `api-version` header and a freshly generated `x-correlation-id`.
pub struct InjectHeadersMiddleware {
    user_agent: HeaderValue,
    banking_api: bool,
}

impl InjectHeadersMiddleware {
    /// Headers for requests to the token endpoint.
    pub fn token_endpoint() -> Self {
        Self {
            user_agent: default_user_agent(),
            banking_api: false,
        }
    }

    /// Headers for requests to the banking APIs.
    pub fn banking_api() -> Self {
        Self {
            user_agent: default_user_agent(),
            banking_api: true,
        }
    }
}

fn default_user_agent() -> HeaderValue {
    HeaderValue::from_static(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ))
}

#[async_trait]
impl Middleware for InjectHeadersMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let headers = req.headers_mut();
        headers.insert(USER_AGENT, self.user_agent.clone());

        if self.banking_api {
            let correlation_id = Uuid::new_v4().to_string();
            tracing::debug!(%correlation_id, "Sending request to the Bankly APIs");

            headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
            headers.insert(
                CORRELATION_ID_HEADER,
                HeaderValue::from_str(&correlation_id)
                    .map_err(|e| reqwest_middleware::Error::Middleware(e.into()))?,
            );
        }

        next.run(req, extensions).await
    }
}
