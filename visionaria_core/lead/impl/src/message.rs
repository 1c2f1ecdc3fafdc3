use url::Url;
use visionaria_core_lead_contracts::message::{LeadMessageService, WHATSAPP_NOT_PROVIDED};
use visionaria_models::lead::Lead;

#[derive(Debug, Clone)]
pub struct LeadMessageServiceImpl {
    config: LeadMessageServiceConfig,
}

#[derive(Debug, Clone)]
pub struct LeadMessageServiceConfig {
    /// Chat link of the recipient, without query
    pub endpoint: Url,
    /// First line of every message
    pub greeting: String,
}

impl LeadMessageServiceImpl {
    pub fn new(config: LeadMessageServiceConfig) -> Self {
        Self { config }
    }

    fn lines(&self, lead: &Lead) -> [String; 6] {
        let whatsapp = lead
            .whatsapp
            .as_ref()
            .map_or(WHATSAPP_NOT_PROVIDED, |whatsapp| whatsapp.as_str());

        [
            self.config.greeting.clone(),
            String::new(),
            format!("Nome: {}", lead.name.as_str()),
            format!("E-mail: {}", lead.email.as_str()),
            format!("WhatsApp: {whatsapp}"),
            format!("Mensagem: {}", lead.message.as_str()),
        ]
    }
}

impl LeadMessageService for LeadMessageServiceImpl {
    fn render_text(&self, lead: &Lead) -> String {
        self.lines(lead).join("\n")
    }

    fn build_link(&self, lead: &Lead) -> Url {
        // lines are encoded one by one so that the separators are always
        // the template's own line breaks
        let text = self
            .lines(lead)
            .iter()
            .map(|line| urlencoding::encode(line))
            .collect::<Vec<_>>()
            .join("%0A");

        let mut url = self.config.endpoint.clone();
        url.set_query(Some(&format!("text={text}")));
        url
    }
}
