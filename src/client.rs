//! Module containing the main Bankly API client.

use crate::{
    apis::{
        accounts::AccountsApi,
        auth::{AuthApi, Credentials},
        events::EventsApi,
        onboarding::OnboardingApi,
        transfers::TransfersApi,
        BanklyClientInner,
    },
    common::{DEFAULT_API_URL, DEFAULT_AUTH_URL},
    executor::RequestExecutor,
    middlewares::{
        authentication::AuthenticationMiddleware, error_handling::ErrorHandlingMiddleware,
        inject_headers::InjectHeadersMiddleware,
    },
    token_cache::TokenCache,
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use std::sync::Arc;

/// Client for Bankly public APIs.
///
/// All the APIs share the same access token, which is requested on first use
/// and refreshed when it has less than 15 minutes left.
/// Every request carries a new `x-correlation-id`. Failed requests are never retried.
#[derive(Debug, Clone)]
pub struct BanklyClient {
    /// Authentication APIs client.
    pub auth: AuthApi,
    /// Accounts APIs client.
    pub accounts: AccountsApi,
    /// Fund transfers APIs client.
    pub transfers: TransfersApi,
    /// Events APIs client.
    pub events: EventsApi,
    /// Onboarding APIs client.
    pub onboarding: OnboardingApi,
}

impl BanklyClient {
    /// Builds a new [`BanklyClient`](crate::client::BanklyClient) with the default configuration.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(credentials: Credentials) -> BanklyClient {
        BanklyClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`BanklyClient`](crate::client::BanklyClient).
    pub fn builder(credentials: Credentials) -> BanklyClientBuilder {
        BanklyClientBuilder::new(credentials)
    }
}

/// Builder for a [`BanklyClient`](crate::client::BanklyClient).
#[derive(Debug)]
pub struct BanklyClientBuilder {
    client: reqwest::Client,
    environment: Environment,
    credentials: Credentials,
}

impl BanklyClientBuilder {
    /// Creates a new builder to configure a [`BanklyClient`](crate::client::BanklyClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            environment: Environment::Live,
            credentials,
        }
    }

    /// Consumes the builder and builds a new [`BanklyClient`](crate::client::BanklyClient).
    ///
    /// Must be called from within a tokio runtime.
    pub fn build(self) -> BanklyClient {
        let token_cache = TokenCache::new(
            build_client_with_middleware(
                self.client.clone(),
                InjectHeadersMiddleware::token_endpoint(),
                None,
            ),
            self.environment.auth_url(),
            self.credentials,
        );

        let auth_middleware = AuthenticationMiddleware {
            token_cache: token_cache.clone(),
        };
        let executor = RequestExecutor::new(
            build_client_with_middleware(
                self.client,
                InjectHeadersMiddleware::banking_api(),
                Some(auth_middleware),
            ),
            self.environment.api_url(),
        );

        let inner = Arc::new(BanklyClientInner {
            executor,
            token_cache,
        });

        BanklyClient {
            auth: AuthApi::new(inner.clone()),
            accounts: AccountsApi::new(inner.clone()),
            transfers: TransfersApi::new(inner.clone()),
            events: EventsApi::new(inner.clone()),
            onboarding: OnboardingApi::new(inner),
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// Use it to configure timeouts, proxies or TLS settings.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the environment to which this client should connect.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

fn build_client_with_middleware(
    client: reqwest::Client,
    inject_headers_middleware: InjectHeadersMiddleware,
    auth_middleware: Option<AuthenticationMiddleware>,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(inject_headers_middleware)
        .with(ErrorHandlingMiddleware);

    if let Some(auth_middleware) = auth_middleware {
        builder = builder.with(auth_middleware);
    }

    builder.build()
}

/// Bankly environment to which a [`BanklyClient`](crate::client::BanklyClient) connects.
#[derive(Clone, Debug)]
pub enum Environment {
    /// Bankly production environment.
    Live,
    /// Custom environment. This variant is mainly used for tests.
    Custom {
        /// Base URL of the token endpoint.
        auth_url: Url,
        /// Base URL of the banking APIs.
        api_url: Url,
    },
}

impl Environment {
    /// Builds a custom environment where all the services share the same `url`.
    pub fn from_single_url(url: &Url) -> Self {
        Self::Custom {
            auth_url: url.clone(),
            api_url: url.clone(),
        }
    }

    /// Base URL for authentication-related requests.
    ///
    /// Always ends with `/`, so the token path is resolved under any path prefix.
    pub fn auth_url(&self) -> Url {
        match self {
            Environment::Live => Url::parse(DEFAULT_AUTH_URL).unwrap(),
            Environment::Custom { auth_url, .. } => as_base_url(auth_url.clone()),
        }
    }

    /// Base URL for banking APIs requests.
    ///
    /// Always ends with `/`, so the API paths are resolved under any path prefix.
    pub fn api_url(&self) -> Url {
        match self {
            Environment::Live => Url::parse(DEFAULT_API_URL).unwrap(),
            Environment::Custom { api_url, .. } => as_base_url(api_url.clone()),
        }
    }
}

fn as_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    url
}
