use tracing::debug;
use url::Url;
use visionaria_core_lead_contracts::{
    message::LeadMessageService, validate::LeadValidateService, LeadFeatureService,
    LeadSubmitError,
};
use visionaria_models::lead::LeadFormInput;

pub mod form;
pub mod message;
pub mod validate;

#[derive(Debug, Clone)]
pub struct LeadFeatureServiceImpl<Validate, Message> {
    validate: Validate,
    message: Message,
}

impl<Validate, Message> LeadFeatureServiceImpl<Validate, Message> {
    pub fn new(validate: Validate, message: Message) -> Self {
        Self { validate, message }
    }
}

impl<Validate, Message> LeadFeatureService for LeadFeatureServiceImpl<Validate, Message>
where
    Validate: LeadValidateService,
    Message: LeadMessageService,
{
    fn submit(&self, input: &LeadFormInput) -> Result<Url, LeadSubmitError> {
        let lead = self.validate.validate(input).map_err(|errors| {
            debug!(invalid_fields = ?errors.fields().collect::<Vec<_>>(), "rejected lead form");
            LeadSubmitError::Invalid(errors)
        })?;

        debug!(whatsapp = lead.whatsapp.is_some(), "building lead deep link");
        Ok(self.message.build_link(&lead))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use visionaria_core_lead_contracts::{
        message::MockLeadMessageService, validate::MockLeadValidateService,
    };
    use visionaria_models::{
        email_address::EmailAddress,
        lead::{Lead, LeadField, LeadFieldErrors, LeadFieldViolation, LeadMessage, LeadName},
    };
    use visionaria_utils::assert_matches;

    use super::*;

    type Sut = LeadFeatureServiceImpl<MockLeadValidateService, MockLeadMessageService>;

    fn input() -> LeadFormInput {
        LeadFormInput {
            name: "Ana Souza".into(),
            email: "ana@example.com".into(),
            whatsapp: Some(String::new()),
            message: "Gostaria de agendar uma vistoria.".into(),
        }
    }

    fn lead() -> Lead {
        Lead {
            name: LeadName::try_new("Ana Souza").unwrap(),
            email: EmailAddress::try_new("ana@example.com").unwrap(),
            whatsapp: None,
            message: LeadMessage::try_new("Gostaria de agendar uma vistoria.").unwrap(),
        }
    }

    #[test]
    fn ok() {
        // Arrange
        let url = Url::parse("https://wa.me/5511995641753?text=Ol%C3%A1").unwrap();

        let validate = MockLeadValidateService::new().with_validate(input(), Ok(lead()));
        let message = MockLeadMessageService::new().with_build_link(lead(), url.clone());

        let sut: Sut = LeadFeatureServiceImpl { validate, message };

        // Act
        let result = sut.submit(&input());

        // Assert
        assert_eq!(result.unwrap(), url);
    }

    #[test]
    fn invalid() {
        // Arrange
        let input = LeadFormInput {
            name: "A".into(),
            ..input()
        };
        let errors = [(LeadField::Name, LeadFieldViolation::TooShort)]
            .into_iter()
            .collect::<LeadFieldErrors>();

        let validate = MockLeadValidateService::new().with_validate(input.clone(), Err(errors.clone()));
        let message = MockLeadMessageService::new();

        let sut: Sut = LeadFeatureServiceImpl { validate, message };

        // Act
        let result = sut.submit(&input);

        // Assert
        assert_matches!(result, Err(LeadSubmitError::Invalid(e)) if e == &errors);
    }
}
