use anyhow::Context;
use visionaria_config::Config;
use visionaria_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use visionaria_core_lead_impl::{
    message::{LeadMessageServiceConfig, LeadMessageServiceImpl},
    validate::LeadValidateServiceImpl,
    LeadFeatureServiceImpl,
};
use visionaria_extern_impl::navigation::{NavigationServiceConfig, NavigationServiceImpl};
use visionaria_models::contact::{whatsapp_chat_url, MapLocation};

pub type LeadFeature = LeadFeatureServiceImpl<LeadValidateServiceImpl, LeadMessageServiceImpl>;
pub type ContactFeature = ContactFeatureServiceImpl;
pub type RestServer = visionaria_api_rest::RestServer<LeadFeature, ContactFeature>;

/// Builds the services from the configuration.
#[derive(Debug, Clone)]
pub struct Provider {
    lead_message_config: LeadMessageServiceConfig,
    contact_feature_config: ContactFeatureConfig,
    opener: Option<Vec<String>>,
}

impl Provider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let endpoint = whatsapp_chat_url(&config.whatsapp.base_url, &config.whatsapp.recipient)
            .context("Invalid whatsapp base url")?;

        let lead_message_config = LeadMessageServiceConfig {
            endpoint,
            greeting: config.lead.greeting.clone(),
        };

        let contact_feature_config = ContactFeatureConfig::new(
            &config.whatsapp.base_url,
            &config.whatsapp.recipient,
            &config.contact.email,
            MapLocation {
                latitude: config.location.latitude,
                longitude: config.location.longitude,
                zoom: config.location.zoom,
                label: config.location.label.clone(),
            },
        )
        .context("Invalid contact channels")?;

        Ok(Self {
            lead_message_config,
            contact_feature_config,
            opener: config.navigation.opener.clone(),
        })
    }

    pub fn lead_feature(&self) -> LeadFeature {
        LeadFeatureServiceImpl::new(
            LeadValidateServiceImpl,
            LeadMessageServiceImpl::new(self.lead_message_config.clone()),
        )
    }

    pub fn contact_feature(&self) -> ContactFeature {
        ContactFeatureServiceImpl::new(self.contact_feature_config.clone())
    }

    pub fn rest_server(&self) -> RestServer {
        RestServer::new(self.lead_feature(), self.contact_feature())
    }

    /// `open_browser = false` prints links instead of opening them.
    pub fn navigation(&self, open_browser: bool) -> NavigationServiceImpl {
        let config = if open_browser {
            NavigationServiceConfig::Browser {
                opener: self.opener.clone(),
            }
        } else {
            NavigationServiceConfig::Stdout
        };
        NavigationServiceImpl::new(config)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use visionaria_config::DEFAULT_CONFIG_PATH;

    use super::*;

    #[test]
    fn provide_from_default_config() {
        let config = visionaria_config::load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        let provider = Provider::new(&config).unwrap();

        assert_eq!(
            provider.lead_message_config.endpoint.as_str(),
            "https://wa.me/5511995641753"
        );
        assert_eq!(
            provider.contact_feature_config.channels.email.as_str(),
            "mailto:visionariaev@gmail.com"
        );
    }
}
