use url::Url;
use visionaria_models::lead::Lead;

/// Text shown in place of the visitor's number when none was given.
pub const WHATSAPP_NOT_PROVIDED: &str = "Não informado";

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LeadMessageService: Send + Sync + 'static {
    /// Render the plain text message for `lead`.
    fn render_text(&self, lead: &Lead) -> String;

    /// Build the deep link that opens the messaging app with the rendered
    /// message pre-filled.
    fn build_link(&self, lead: &Lead) -> Url;
}

#[cfg(feature = "mock")]
impl MockLeadMessageService {
    pub fn with_build_link(mut self, lead: Lead, result: Url) -> Self {
        self.expect_build_link()
            .once()
            .with(mockall::predicate::eq(lead))
            .return_once(|_| result);
        self
    }
}
