use thiserror::Error;
use url::Url;
use visionaria_models::lead::{LeadFieldErrors, LeadFormInput};

pub mod message;
pub mod validate;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LeadFeatureService: Send + Sync + 'static {
    /// Validate the form input and build the deep link that opens the
    /// messaging app with the pre-filled lead message.
    ///
    /// Does not navigate anywhere, the caller decides how to open the link.
    fn submit(&self, input: &LeadFormInput) -> Result<Url, LeadSubmitError>;
}

#[derive(Debug, Error)]
pub enum LeadSubmitError {
    #[error("Invalid form: {0}")]
    Invalid(LeadFieldErrors),
}

#[cfg(feature = "mock")]
impl MockLeadFeatureService {
    pub fn with_submit(mut self, input: LeadFormInput, result: Result<Url, LeadSubmitError>) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(input))
            .return_once(|_| result);
        self
    }
}
