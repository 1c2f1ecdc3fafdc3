use visionaria_core_lead_contracts::validate::LeadValidateService;
use visionaria_models::{
    email_address::EmailAddress,
    lead::{
        Lead, LeadField, LeadFieldErrors, LeadFieldViolation, LeadFormInput, LeadMessage, LeadName,
        LeadWhatsapp,
    },
};

#[derive(Debug, Clone, Copy, Default)]
pub struct LeadValidateServiceImpl;

impl LeadValidateService for LeadValidateServiceImpl {
    fn validate(&self, input: &LeadFormInput) -> Result<Lead, LeadFieldErrors> {
        let mut errors = LeadFieldErrors::new();

        let name = check(&mut errors, LeadField::Name, LeadName::try_new(&*input.name));
        let email = check(
            &mut errors,
            LeadField::Email,
            EmailAddress::try_new(&*input.email),
        );
        let whatsapp = match input.whatsapp.as_deref() {
            None | Some("") => Some(None),
            Some(whatsapp) => check(
                &mut errors,
                LeadField::Whatsapp,
                LeadWhatsapp::try_new(whatsapp),
            )
            .map(Some),
        };
        let message = check(
            &mut errors,
            LeadField::Message,
            LeadMessage::try_new(&*input.message),
        );

        match (name, email, whatsapp, message) {
            (Some(name), Some(email), Some(whatsapp), Some(message)) => Ok(Lead {
                name,
                email,
                whatsapp,
                message,
            }),
            _ => Err(errors),
        }
    }
}

fn check<T, E>(errors: &mut LeadFieldErrors, field: LeadField, result: Result<T, E>) -> Option<T>
where
    E: Into<LeadFieldViolation>,
{
    result.map_err(|err| errors.insert(field, err.into())).ok()
}
