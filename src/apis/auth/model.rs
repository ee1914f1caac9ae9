use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Credentials used to authenticate against Bankly's token endpoint.
#[derive(Clone, Debug)]
pub enum Credentials {
    /// `client_credentials` grant.
    ClientCredentials {
        client_id: String,
        client_secret: Token,
    },
    /// `password` grant, for clients acting on behalf of a user.
    Password {
        client_id: String,
        client_secret: Token,
        username: String,
        password: Token,
    },
}

impl Credentials {
    /// OAuth2 grant type sent to the token endpoint.
    pub fn grant_type(&self) -> &'static str {
        match self {
            Credentials::ClientCredentials { .. } => "client_credentials",
            Credentials::Password { .. } => "password",
        }
    }

    /// Returns a reference to the client id stored in these [`Credentials`](crate::apis::auth::Credentials).
    pub fn client_id(&self) -> &str {
        match self {
            Credentials::ClientCredentials { client_id, .. }
            | Credentials::Password { client_id, .. } => client_id,
        }
    }

    /// Returns a reference to the client secret stored in these [`Credentials`](crate::apis::auth::Credentials).
    pub fn client_secret(&self) -> &Token {
        match self {
            Credentials::ClientCredentials { client_secret, .. }
            | Credentials::Password { client_secret, .. } => client_secret,
        }
    }

    /// Form fields posted to the token endpoint.
    pub(crate) fn form_params(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![
            ("grant_type", self.grant_type()),
            ("client_id", self.client_id()),
            ("client_secret", self.client_secret().expose_secret()),
        ];

        if let Credentials::Password {
            username, password, ..
        } = self
        {
            params.push(("username", username.as_str()));
            params.push(("password", password.expose_secret()));
        }

        params
    }
}

/// Access token issued by the token endpoint, together with its type and expiration.
///
/// A token never exists without its expiration date.
#[derive(Clone, Debug)]
pub struct AccessToken {
    pub(crate) token: Token,
    pub(crate) token_type: String,
    pub(crate) expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Actual token contents held by this `AccessToken` instance.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Token type reported by the server, used as the `Authorization` scheme.
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// Expiration date of the token.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Value of the `Authorization` header carrying this token.
    pub(crate) fn authorization(&self) -> String {
        format!("{} {}", self.token_type, self.token.expose_secret())
    }
}

impl Deref for AccessToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        self.token()
    }
}

/// Wrapper for a secret string that makes it harder to accidentally expose secrets
/// and ensures the backing memory is wiped on drop.
///
/// ```rust
/// # use bankly_rust::apis::auth::Token;
/// let token = Token::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", token).contains("supersecret"));
///
/// // But can be manually exposed calling `expose_secret()`...
/// assert_eq!(token.expose_secret(), "supersecret");
///
/// // ... Or if serialized with Serde
/// let serialized = serde_json::to_string(&token).unwrap();
/// assert!(serialized.contains("supersecret"));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Token(#[serde(serialize_with = "serialize_secret")] Secret<String>);

impl Token {
    /// Wraps a secret string in a new `Token`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    secret.expose_secret().serialize(serializer)
}
