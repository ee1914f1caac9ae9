// Default URLs
pub static DEFAULT_AUTH_URL: &str = "https://login.acessobank.com.br";
pub static DEFAULT_API_URL: &str = "https://api.bankly.com.br";

// Token endpoint
pub static TOKEN_PATH: &str = "connect/token";
pub static FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// Header names
pub static API_VERSION_HEADER: &str = "api-version";
pub static CORRELATION_ID_HEADER: &str = "x-correlation-id";

pub static API_VERSION: &str = "1";
