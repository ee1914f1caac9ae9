//! Standard errors used by all functions in the crate.

use crate::executor::Operation;
use std::{collections::BTreeMap, fmt};

/// Error collecting all possible failures of the Bankly client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reqwest error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a Bankly API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// The token endpoint rejected the credentials, could not be reached
    /// or answered with something that is not a usable access token.
    ///
    /// The client stays usable: the next call authenticates from scratch.
    #[error("Authentication failed: {0}")]
    AuthenticationError(#[source] Box<Error>),
    /// A banking operation failed.
    ///
    /// The message is the operation name followed by the upstream failure,
    /// e.g. `getTransfer: Bankly HTTP error 500: Internal Server Error`.
    #[error("{operation}: {source}")]
    OperationError {
        operation: Operation,
        #[source]
        source: Box<Error>,
    },
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl Error {
    /// Returns the operation this error was raised by, if any.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Error::OperationError { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Returns `true` if this error was caused by a failed authentication,
    /// either directly or while running a banking operation.
    pub fn is_authentication_error(&self) -> bool {
        match self {
            Error::AuthenticationError(_) => true,
            Error::OperationError { source, .. } => source.is_authentication_error(),
            _ => false,
        }
    }

    /// Returns the [`ApiError`] returned by Bankly, looking through
    /// operation and authentication wrappers.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::ApiError(api_error) => Some(api_error),
            Error::AuthenticationError(source) | Error::OperationError { source, .. } => {
                source.api_error()
            }
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Bankly HTTP APIs error.
#[derive(thiserror::Error, Debug)]
pub struct ApiError {
    /// HTTP status returned by the server.
    pub status: u16,
    /// Concise description of the error.
    pub title: String,
    /// A human readable explanation specific to this occurrence of the problem.
    pub detail: Option<String>,
    /// The correlation id sent with the failed request.
    pub correlation_id: Option<String>,
    /// Additional details, keyed by the offending property when Bankly reports one, in property order.
    pub errors: BTreeMap<String, Vec<String>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bankly HTTP error {}: {}", self.status, self.title)?;

        if let Some(ref detail) = self.detail {
            write!(f, "\nAdditional details: {}", detail)?;
        }

        if let Some(ref correlation_id) = self.correlation_id {
            write!(f, "\nCorrelation ID: {}", correlation_id)?;
        }

        if !self.errors.is_empty() {
            write!(f, "\nAll errors:")?;
            for (k, v) in &self.errors {
                write!(f, "\n- {}: {}", k, v.join(", "))?;
            }
        }

        Ok(())
    }
}
