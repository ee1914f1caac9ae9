use crate::{
    apis::{
        onboarding::{
            DocumentImageStatus, DocumentStatus, RegisterUserRequest, UploadDocumentImageRequest,
        },
        BanklyClientInner,
    },
    executor::Operation,
    Error,
};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Bankly onboarding APIs client.
#[derive(Clone, Debug)]
pub struct OnboardingApi {
    inner: Arc<BanklyClientInner>,
}

impl OnboardingApi {
    pub(crate) fn new(inner: Arc<BanklyClientInner>) -> Self {
        Self { inner }
    }

    /// Registers a new customer with their personal data.
    #[tracing::instrument(name = "Register User", skip_all)]
    pub async fn register_user(
        &self,
        register_user_request: &RegisterUserRequest,
    ) -> Result<Value, Error> {
        self.inner
            .executor
            .execute(
                Operation::PostUserData,
                Method::POST,
                "baas/person-rating",
                |req| req.json(register_user_request),
            )
            .await
    }

    /// Sends an image of an identity document, or a selfie.
    ///
    /// Images are sent whole: no size cap is applied on the client side.
    #[tracing::instrument(
        name = "Upload Document Image",
        skip(self, upload_request),
        fields(
            document_type = ?upload_request.document_type,
            document_side = ?upload_request.document_side,
        )
    )]
    pub async fn upload_document_image(
        &self,
        upload_request: &UploadDocumentImageRequest,
    ) -> Result<Value, Error> {
        self.inner
            .executor
            .execute(
                Operation::PostImagesDocument,
                Method::POST,
                "baas/documents",
                |req| req.json(upload_request),
            )
            .await
    }

    /// Gets the onboarding status of a person.
    #[tracing::instrument(name = "Get Document Status", skip(self))]
    pub async fn get_document_status(&self, document: &str) -> Result<DocumentStatus, Error> {
        self.inner
            .executor
            .execute(
                Operation::GetDocumentStatus,
                Method::GET,
                &format!("baas/onboardstatus/{}/status", encode(document)),
                |req| req,
            )
            .await
    }

    /// Gets the onboarding status of a person along with the state of each image they sent.
    #[tracing::instrument(name = "Get Document Image Status", skip(self))]
    pub async fn get_document_image_status(
        &self,
        document: &str,
    ) -> Result<DocumentImageStatus, Error> {
        self.inner
            .executor
            .execute(
                Operation::GetDocumentImageStatus,
                Method::GET,
                "baas/documents",
                |req| req.query(&[("document", document)]),
            )
            .await
    }
}
