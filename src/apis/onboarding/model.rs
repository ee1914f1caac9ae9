use crate::apis::auth::Token;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Onboarding status of a person.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStatus {
    pub document: String,
    pub last_status: LastStatus,
}

/// Onboarding status of a person, with the images they sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentImageStatus {
    pub document: String,
    pub last_status: LastStatus,
    #[serde(default)]
    pub images: Vec<DocumentImage>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LastStatus {
    pub situation: String,
    pub date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentImage {
    pub document_type: String,
    pub document_side: String,
    pub upload_date: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejected_reasons: Vec<String>,
}

/// Image of an identity document, or a selfie, sent during onboarding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentImageRequest {
    pub document: String,
    pub document_type: DocumentType,
    pub document_side: DocumentSide,
    /// Base64 encoded image.
    pub file: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentType {
    Selfie,
    #[serde(rename = "RG")]
    Rg,
    #[serde(rename = "CNH")]
    Cnh,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSide {
    Front,
    Back,
}

/// Personal data sent to register a new customer.
#[derive(Serialize, Deserialize, Debug, Clone, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub document: String,
    pub first_name: String,
    pub surname: String,
    pub social_name: String,
    pub password: Token,
    pub country_calling_code: String,
    pub phone_number: String,
    pub mother_name: String,
    /// Date of birth, as expected by Bankly.
    pub birthday: String,
    pub email: String,
    pub address: Address,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub zip_code: String,
    pub address_line: String,
    pub address_number: String,
    pub complement: String,
    pub neighborhood: String,
    pub country: String,
    pub address_state: String,
    pub city: String,
}
