use clap::Args;
use visionaria_config::Config;
use visionaria_core_lead_contracts::LeadFeatureService;
use visionaria_models::lead::LeadFormInput;

use crate::environment::Provider;

#[derive(Debug, Args)]
pub struct LinkCommand {
    /// Full name of the visitor
    #[arg(long)]
    name: String,
    /// Email address of the visitor
    #[arg(long)]
    email: String,
    /// Phone number with area code, digits only
    #[arg(long)]
    whatsapp: Option<String>,
    /// Message to the company
    #[arg(long)]
    message: String,
}

impl LinkCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let lead = Provider::new(&config)?.lead_feature();

        let url = lead.submit(&LeadFormInput {
            name: self.name,
            email: self.email,
            whatsapp: self.whatsapp,
            message: self.message,
        })?;

        println!("{url}");

        Ok(())
    }
}
