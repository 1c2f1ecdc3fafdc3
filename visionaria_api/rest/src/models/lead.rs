use serde::{Deserialize, Serialize};
use url::Url;
use visionaria_models::lead::{LeadFieldErrors, LeadFormInput};

/// Lead form as posted by the site, either as json or as an html form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiLeadForm {
    /// Full name of the visitor
    #[serde(alias = "nome")]
    pub name: String,
    /// Email address of the visitor
    pub email: String,
    /// Optional phone number with area code, digits only
    pub whatsapp: Option<String>,
    /// Free text message
    #[serde(alias = "mensagem")]
    pub message: String,
}

impl From<ApiLeadForm> for LeadFormInput {
    fn from(value: ApiLeadForm) -> Self {
        Self {
            name: value.name,
            email: value.email,
            whatsapp: value.whatsapp,
            message: value.message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiLeadLink {
    /// Deep link that opens the messaging app with the pre-filled message
    pub url: Url,
}

#[derive(Debug, Serialize)]
pub struct ApiLeadFormErrors {
    pub detail: &'static str,
    /// Inline message per invalid field
    pub errors: LeadFieldErrors,
}
