use crate::{
    apis::auth::{AccessToken, Credentials},
    common::{FORM_CONTENT_TYPE, TOKEN_PATH},
    error::Error,
};
use anyhow::anyhow;
use chrono::Duration;
use reqwest::{header::ACCEPT, Url};
use reqwest_middleware::ClientWithMiddleware;
use tokio::sync::{mpsc, oneshot};

/// A cached token is handed out only if it has at least this many whole minutes left.
const REFRESH_MARGIN_MINUTES: i64 = 15;

type Reply = oneshot::Sender<Result<AccessToken, Error>>;

enum Command {
    EnsureValidToken(Reply),
    Refresh(Reply),
}

/// Cache for the access token used by every request sent to the Bankly APIs.
///
/// The token state is owned by a background task which serves one command at a time,
/// so concurrent callers observing a stale token are answered by a single refresh.
#[derive(Debug, Clone)]
pub struct TokenCache {
    tx: mpsc::UnboundedSender<Command>,
}

impl TokenCache {
    /// Starts a new, empty token cache for the given credentials.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(client: ClientWithMiddleware, auth_url: Url, credentials: Credentials) -> Self {
        let state = TokenCacheState {
            client,
            auth_url,
            credentials,
            access_token: None,
        };

        // The task runs until every handle to this cache is dropped
        let (tx, rx) = mpsc::unbounded_channel();
        #[cfg(test)]
        tests::mocked_time::spawn(async move {
            process_loop(state, rx).await;
        });
        #[cfg(not(test))]
        tokio::spawn(async move {
            process_loop(state, rx).await;
        });

        Self { tx }
    }

    /// Returns a token with at least 15 minutes of remaining lifetime,
    /// refreshing the cached one if needed.
    pub async fn ensure_valid_token(&self) -> Result<AccessToken, Error> {
        self.send(Command::EnsureValidToken).await
    }

    /// Requests a new token from the token endpoint and caches it.
    ///
    /// On failure the cached token is left untouched.
    pub async fn refresh(&self) -> Result<AccessToken, Error> {
        self.send(Command::Refresh).await
    }

    async fn send(&self, command: fn(Reply) -> Command) -> Result<AccessToken, Error> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(command(tx))
            .map_err(|_| Error::Other(anyhow!("Token cache task is not running")))?;

        rx.await
            .map_err(|_| Error::Other(anyhow!("Token cache task dropped the request")))?
    }
}

struct TokenCacheState {
    client: ClientWithMiddleware,
    auth_url: Url,
    credentials: Credentials,
    access_token: Option<AccessToken>,
}

async fn process_loop(mut state: TokenCacheState, mut rx: mpsc::UnboundedReceiver<Command>) {
    while let Some(command) = rx.recv().await {
        let (reply, result) = match command {
            Command::EnsureValidToken(reply) => (reply, ensure_valid_token(&mut state).await),
            Command::Refresh(reply) => (reply, refresh(&mut state).await),
        };

        if reply.send(result).is_err() {
            tracing::warn!("Receiver dropped before the reply");
        }
    }
}

#[tracing::instrument(name = "Ensure Valid Token", level = "debug", skip(state))]
async fn ensure_valid_token(state: &mut TokenCacheState) -> Result<AccessToken, Error> {
    if let Some(token) = &state.access_token {
        if !should_refresh_token(token) {
            tracing::debug!("Reusing cached access token");
            return Ok(token.clone());
        }
    }

    refresh(state).await
}

#[tracing::instrument(
    name = "Refresh Access Token",
    level = "debug",
    skip(state),
    fields(grant_type = state.credentials.grant_type())
)]
async fn refresh(state: &mut TokenCacheState) -> Result<AccessToken, Error> {
    let token = request_token(state).await.map_err(|e| {
        tracing::warn!("Failed to get a new access token: {}", e);
        Error::AuthenticationError(Box::new(e))
    })?;

    state.access_token = Some(token.clone());
    tracing::info!(expires_at = %token.expires_at, "Got new access token");

    Ok(token)
}

async fn request_token(state: &TokenCacheState) -> Result<AccessToken, Error> {
    let token_url = state
        .auth_url
        .join(TOKEN_PATH)
        .map_err(|e| Error::Other(e.into()))?;

    let res: RawTokenResponse = state
        .client
        .post(token_url)
        .header(ACCEPT, FORM_CONTENT_TYPE)
        .form(&state.credentials.form_params())
        .send()
        .await?
        .json()
        .await?;

    if res.expires_in == 0 {
        return Err(Error::Other(anyhow!(
            "Token endpoint returned an access token with no lifetime"
        )));
    }

    Ok(AccessToken {
        token: res.access_token.into(),
        token_type: res.token_type,
        expires_at: now() + Duration::seconds(i64::from(res.expires_in)),
    })
}

/// Returns `true` if fewer than 15 whole minutes are left before the token expires.
fn should_refresh_token(token: &AccessToken) -> bool {
    (token.expires_at - now()).num_minutes() < REFRESH_MARGIN_MINUTES
}

// Select an implementation of `now()` depending on whether we are testing or not
#[cfg(not(test))]
fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
#[cfg(test)]
use tests::mocked_time::now;

/// Successful response of the token endpoint.
#[derive(serde::Deserialize)]
struct RawTokenResponse {
    access_token: String,
    #[serde(default = "default_token_type")]
    token_type: String,
    expires_in: u32,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}
