use std::io::{BufRead, Write};

use anyhow::Context;
use clap::Args;
use url::Url;
use visionaria_config::Config;
use visionaria_core_lead_contracts::LeadFeatureService;
use visionaria_core_lead_impl::form::{LeadForm, LeadFormOutcome};
use visionaria_extern_contracts::navigation::NavigationService;
use visionaria_models::lead::LeadField;

use crate::environment::Provider;

#[derive(Debug, Args)]
pub struct LeadCommand {
    /// Print the WhatsApp link instead of opening it in the browser
    #[arg(long)]
    no_open: bool,
}

impl LeadCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let provider = Provider::new(&config)?;
        let mut form = LeadForm::new(provider.lead_feature(), provider.navigation(!self.no_open));

        let url = fill_and_submit(&mut form, std::io::stdin().lock(), std::io::stdout().lock())?;
        if !self.no_open {
            println!("Se o WhatsApp não abrir, acesse: {url}");
        }

        Ok(())
    }
}

/// Prompt for every field, then only for the invalid ones, until the form
/// is dispatched.
fn fill_and_submit<LeadFeature, Navigation>(
    form: &mut LeadForm<LeadFeature, Navigation>,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<Url>
where
    LeadFeature: LeadFeatureService,
    Navigation: NavigationService,
{
    let mut lines = input.lines();
    let mut pending = LeadField::ALL.to_vec();

    loop {
        for &field in &pending {
            write!(output, "{}: ", field.label())?;
            output.flush()?;
            let value = lines.next().context("Unexpected end of input")??;
            form.set_field(field, value);
        }

        match form.submit() {
            LeadFormOutcome::Dispatched(url) => {
                writeln!(output, "Enviando via WhatsApp...")?;
                return Ok(url);
            }
            LeadFormOutcome::Invalid(errors) => {
                for (field, violation) in errors.iter() {
                    writeln!(output, "⚠️ {}", field.violation_message(violation))?;
                }
                pending = errors.fields().collect();
            }
            LeadFormOutcome::Suppressed => unreachable!("the form is borrowed while submitting"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use visionaria_extern_contracts::navigation::MockNavigationService;

    use super::*;
    use crate::environment::LeadFeature;

    fn lead_feature() -> LeadFeature {
        use visionaria_core_lead_impl::{
            message::{LeadMessageServiceConfig, LeadMessageServiceImpl},
            validate::LeadValidateServiceImpl,
            LeadFeatureServiceImpl,
        };

        LeadFeatureServiceImpl::new(
            LeadValidateServiceImpl,
            LeadMessageServiceImpl::new(LeadMessageServiceConfig {
                endpoint: "https://wa.me/5511995641753".parse().unwrap(),
                greeting: "Olá, Visionária Vistorias!".into(),
            }),
        )
    }

    #[test]
    fn reprompts_invalid_fields_only() {
        // Arrange
        let mut navigation = MockNavigationService::new();
        navigation.expect_open_new_window().once().return_const(());
        let mut form = LeadForm::new(lead_feature(), navigation);

        let input = "A\nana@example.com\n123\nGostaria de agendar uma vistoria.\nAna \
                     Souza\n11987654321\n";
        let mut output = Vec::new();

        // Act
        let result = fill_and_submit(&mut form, input.as_bytes(), &mut output);

        // Assert
        let url = result.unwrap();
        assert!(url.as_str().contains("Nome%3A%20Ana%20Souza"));
        assert!(url.as_str().contains("WhatsApp%3A%2011987654321"));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Nome completo *: E-mail *: WhatsApp (opcional): Mensagem *: ⚠️ Nome deve ter pelo \
             menos 2 caracteres\n⚠️ WhatsApp deve ter 10 ou 11 dígitos\nNome completo *: \
             WhatsApp (opcional): Enviando via WhatsApp...\n"
        );
    }

    #[test]
    fn end_of_input() {
        // Arrange
        let mut form = LeadForm::new(lead_feature(), MockNavigationService::new());

        // Act
        let result = fill_and_submit(&mut form, "Ana Souza\n".as_bytes(), std::io::sink());

        // Assert
        assert!(result.is_err());
    }
}
