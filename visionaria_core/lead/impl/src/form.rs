use tracing::debug;
use url::Url;
use visionaria_core_lead_contracts::{LeadFeatureService, LeadSubmitError};
use visionaria_extern_contracts::navigation::NavigationService;
use visionaria_models::lead::{LeadField, LeadFieldErrors, LeadFormInput};

/// Submission workflow of one lead form instance.
///
/// `Idle` is both the initial and the terminal state:
///
/// ```text
/// Idle -> Validating -> Invalid -> Idle
///                    -> Valid -> Dispatched -> Idle
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadFormState {
    Idle,
    Validating,
    Invalid,
    Valid,
    Dispatched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadFormOutcome {
    /// The deep link was handed to the navigation service and the form was
    /// reset.
    Dispatched(Url),
    /// Nothing was dispatched, the errors are attached to the form.
    Invalid(LeadFieldErrors),
    /// Another submission of this form is still in progress.
    Suppressed,
}

/// Form state owned by a UI layer.
///
/// Holds the entered values and the inline errors of the last submission.
/// Values survive a failed submission so that only the invalid fields have to
/// be corrected.
///
/// [`LeadForm::submit`] takes `&mut self` and runs to completion, so a caller
/// holding the form can never submit it twice concurrently: the borrow already
/// enforces the duplicate-submit suppression. The `Idle` guard keeps the state
/// machine total and yields [`LeadFormOutcome::Suppressed`] for any other
/// state.
#[derive(Debug)]
pub struct LeadForm<LeadFeature, Navigation> {
    lead: LeadFeature,
    navigation: Navigation,
    input: LeadFormInput,
    errors: LeadFieldErrors,
    state: LeadFormState,
}

impl<LeadFeature, Navigation> LeadForm<LeadFeature, Navigation>
where
    LeadFeature: LeadFeatureService,
    Navigation: NavigationService,
{
    pub fn new(lead: LeadFeature, navigation: Navigation) -> Self {
        Self {
            lead,
            navigation,
            input: LeadFormInput::default(),
            errors: LeadFieldErrors::default(),
            state: LeadFormState::Idle,
        }
    }

    pub fn state(&self) -> LeadFormState {
        self.state
    }

    pub fn input(&self) -> &LeadFormInput {
        &self.input
    }

    pub fn errors(&self) -> &LeadFieldErrors {
        &self.errors
    }

    /// Whether the submit affordance is enabled.
    pub fn can_submit(&self) -> bool {
        self.state == LeadFormState::Idle
    }

    pub fn set_field(&mut self, field: LeadField, value: impl Into<String>) {
        self.input.set(field, value.into());
    }

    pub fn submit(&mut self) -> LeadFormOutcome {
        if !self.can_submit() {
            debug!(state = ?self.state, "suppressed lead form submission");
            return LeadFormOutcome::Suppressed;
        }

        self.transition(LeadFormState::Validating);
        match self.lead.submit(&self.input) {
            Ok(url) => {
                self.transition(LeadFormState::Valid);
                self.errors = LeadFieldErrors::default();

                self.transition(LeadFormState::Dispatched);
                self.navigation.open_new_window(&url);
                self.input = LeadFormInput::default();

                self.transition(LeadFormState::Idle);
                LeadFormOutcome::Dispatched(url)
            }
            Err(LeadSubmitError::Invalid(errors)) => {
                self.transition(LeadFormState::Invalid);
                self.errors = errors.clone();

                self.transition(LeadFormState::Idle);
                LeadFormOutcome::Invalid(errors)
            }
        }
    }

    fn transition(&mut self, state: LeadFormState) {
        debug!(from = ?self.state, to = ?state, "lead form transition");
        self.state = state;
    }
}
