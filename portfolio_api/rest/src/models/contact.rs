use portfolio_core_contact_contracts::ContactSubmitRequest;
use serde::Deserialize;

/// Contact form payload. Absent and `null` fields are treated as empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl From<ApiContactSubmission> for ContactSubmitRequest {
    fn from(value: ApiContactSubmission) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            email: value.email.unwrap_or_default(),
            message: value.message.unwrap_or_default(),
            phone_number: value.phone_number,
        }
    }
}
