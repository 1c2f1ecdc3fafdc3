use std::sync::Arc;

use url::Url;
use visionaria_core_contact_contracts::ContactFeatureService;
use visionaria_models::{
    contact::{whatsapp_chat_url, ContactChannels, MapLocation, WhatsappRecipient},
    email_address::EmailAddress,
};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl {
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    pub channels: Arc<ContactChannels>,
}

impl ContactFeatureConfig {
    pub fn new(
        whatsapp_base_url: &Url,
        whatsapp_recipient: &WhatsappRecipient,
        email: &EmailAddress,
        location: MapLocation,
    ) -> Result<Self, url::ParseError> {
        let channels = ContactChannels {
            whatsapp: whatsapp_chat_url(whatsapp_base_url, whatsapp_recipient)?,
            email: email.mailto()?,
            location,
        };

        Ok(Self {
            channels: channels.into(),
        })
    }
}

impl ContactFeatureServiceImpl {
    pub fn new(config: ContactFeatureConfig) -> Self {
        Self { config }
    }
}

impl ContactFeatureService for ContactFeatureServiceImpl {
    fn get_channels(&self) -> ContactChannels {
        (*self.config.channels).clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn get_channels() {
        // Arrange
        let location = MapLocation {
            latitude: -23.1865,
            longitude: -46.8978,
            zoom: 15,
            label: vec![
                "Visionária Vistorias".into(),
                "Rua Dante Belodi, 123, Bairro Eloy Chaves".into(),
            ],
        };
        let config = ContactFeatureConfig::new(
            &"https://wa.me/".parse().unwrap(),
            &WhatsappRecipient::try_new("5511995641753").unwrap(),
            &EmailAddress::try_new("visionariaev@gmail.com").unwrap(),
            location.clone(),
        )
        .unwrap();

        let sut = ContactFeatureServiceImpl::new(config);

        // Act
        let result = sut.get_channels();

        // Assert
        assert_eq!(
            result,
            ContactChannels {
                whatsapp: "https://wa.me/5511995641753".parse().unwrap(),
                email: "mailto:visionariaev@gmail.com".parse().unwrap(),
                location,
            }
        );
    }
}
