use visionaria_models::lead::{Lead, LeadFieldErrors, LeadFormInput};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LeadValidateService: Send + Sync + 'static {
    /// Check every field of `input` and either return the validated lead or
    /// the violations of all invalid fields.
    fn validate(&self, input: &LeadFormInput) -> Result<Lead, LeadFieldErrors>;
}

#[cfg(feature = "mock")]
impl MockLeadValidateService {
    pub fn with_validate(
        mut self,
        input: LeadFormInput,
        result: Result<Lead, LeadFieldErrors>,
    ) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(input))
            .return_once(|_| result);
        self
    }
}
