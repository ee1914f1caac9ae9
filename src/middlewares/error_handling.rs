use crate::{
    common::CORRELATION_ID_HEADER,
    error::{ApiError, Error},
};
use async_trait::async_trait;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use std::collections::BTreeMap;
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from Bankly APIs
/// into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let correlation_id = req
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an ApiError if the response is not a success
        if !response.status().is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            let api_error = api_error_from_response(response, correlation_id).await?;
            return Err(Error::ApiError(api_error).into());
        }

        Ok(response)
    }
}

/// Body of an error response from Bankly APIs.
#[derive(serde::Deserialize, Debug)]
#[serde(untagged)]
enum ErrorResponseBody {
    /// Problem details, as returned by most business endpoints.
    ProblemDetails {
        title: String,
        detail: Option<String>,
        errors: Option<BTreeMap<String, Vec<String>>>,
    },
    /// List of validation errors.
    Validation { errors: Vec<ValidationError> },
    /// OAuth2 error, as returned by the token endpoint.
    OAuth {
        error: String,
        error_description: Option<String>,
    },
}

#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ValidationError {
    code: Option<String>,
    property_name: Option<String>,
    #[serde(default)]
    messages: Vec<String>,
}

async fn api_error_from_response(
    response: Response,
    correlation_id: Option<String>,
) -> reqwest_middleware::Result<ApiError> {
    let status = response.status();
    let correlation_id = correlation_id.or_else(|| {
        response
            .headers()
            .get(CORRELATION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string())
    });

    // Try parsing the contents of the error as JSON,
    // but if that doesn't work, use the entire contents of the response as the error text.
    let bytes = response.bytes().await?;
    let api_error = match serde_json::from_slice::<ErrorResponseBody>(&bytes) {
        Ok(ErrorResponseBody::ProblemDetails {
            title,
            detail,
            errors,
        }) => ApiError {
            status: status.as_u16(),
            title,
            detail,
            correlation_id,
            errors: errors.unwrap_or_default(),
        },
        Ok(ErrorResponseBody::Validation { errors }) => {
            let title = errors
                .iter()
                .find_map(|e| e.code.clone())
                .unwrap_or_else(|| canonical_reason(status));

            let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for error in errors {
                let key = error
                    .property_name
                    .or(error.code)
                    .unwrap_or_else(|| "error".to_string());
                grouped.entry(key).or_default().extend(error.messages);
            }

            ApiError {
                status: status.as_u16(),
                title,
                detail: None,
                correlation_id,
                errors: grouped,
            }
        }
        Ok(ErrorResponseBody::OAuth {
            error,
            error_description,
        }) => ApiError {
            status: status.as_u16(),
            title: error,
            detail: error_description,
            correlation_id,
            errors: BTreeMap::new(),
        },
        Err(_) => ApiError {
            status: status.as_u16(),
            title: if bytes.is_empty() {
                canonical_reason(status)
            } else {
                String::from_utf8_lossy(&bytes).into_owned()
            },
            detail: None,
            correlation_id,
            errors: BTreeMap::new(),
        },
    };

    Ok(api_error)
}

fn canonical_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown Error")
        .to_string()
}
