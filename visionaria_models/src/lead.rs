use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::{
    email_address::{EmailAddress, EmailAddressError},
    macros::nutype_string,
};

pub static LEAD_WHATSAPP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{10,11}$").unwrap());

/// Raw input of the lead capture form, exactly as typed by the visitor.
///
/// Missing fields deserialize to empty strings so that they are reported as
/// field errors instead of rejecting the whole request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadFormInput {
    pub name: String,
    pub email: String,
    pub whatsapp: Option<String>,
    pub message: String,
}

impl LeadFormInput {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Whatsapp => self.whatsapp.as_deref().unwrap_or_default(),
            LeadField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Whatsapp => self.whatsapp = Some(value),
            LeadField::Message => self.message = value,
        }
    }
}

/// A lead whose fields passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: LeadName,
    pub email: EmailAddress,
    pub whatsapp: Option<LeadWhatsapp>,
    pub message: LeadMessage,
}

nutype_string!(LeadName(validate(
    with = validate_name_length,
    error = LeadTextLengthError
)));
impl LeadName {
    pub const MIN_LENGTH: usize = 2;
    pub const MAX_LENGTH: usize = 100;
}

nutype_string!(LeadWhatsapp(validate(regex = LEAD_WHATSAPP_REGEX)));

nutype_string!(LeadMessage(validate(
    with = validate_message_length,
    error = LeadTextLengthError
)));
impl LeadMessage {
    pub const MIN_LENGTH: usize = 10;
    pub const MAX_LENGTH: usize = 500;
}

/// Text length as seen by browsers, in UTF-16 code units.
pub fn text_length(value: &str) -> usize {
    value.encode_utf16().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LeadTextLengthError {
    #[error("Text is too short")]
    TooShort,
    #[error("Text is too long")]
    TooLong,
}

fn validate_length(value: &str, min: usize, max: usize) -> Result<(), LeadTextLengthError> {
    match text_length(value) {
        len if len < min => Err(LeadTextLengthError::TooShort),
        len if len > max => Err(LeadTextLengthError::TooLong),
        _ => Ok(()),
    }
}

fn validate_name_length(value: &str) -> Result<(), LeadTextLengthError> {
    validate_length(value, LeadName::MIN_LENGTH, LeadName::MAX_LENGTH)
}

fn validate_message_length(value: &str) -> Result<(), LeadTextLengthError> {
    validate_length(value, LeadMessage::MIN_LENGTH, LeadMessage::MAX_LENGTH)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadField {
    Name,
    Email,
    Whatsapp,
    Message,
}

impl LeadField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Whatsapp, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
            Self::Message => "message",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome completo *",
            Self::Email => "E-mail *",
            Self::Whatsapp => "WhatsApp (opcional)",
            Self::Message => "Mensagem *",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Whatsapp)
    }

    /// One-line message displayed inline when this field fails with the
    /// given violation.
    pub fn violation_message(self, violation: LeadFieldViolation) -> &'static str {
        use LeadFieldViolation::*;

        match (self, violation) {
            (Self::Name, TooShort) => "Nome deve ter pelo menos 2 caracteres",
            (Self::Name, TooLong) => "Nome muito longo",
            (Self::Name, InvalidFormat) => "Nome inválido",
            (Self::Email, _) => "E-mail inválido",
            (Self::Whatsapp, _) => "WhatsApp deve ter 10 ou 11 dígitos",
            (Self::Message, TooShort) => "Mensagem deve ter pelo menos 10 caracteres",
            (Self::Message, TooLong) => "Mensagem muito longa",
            (Self::Message, InvalidFormat) => "Mensagem inválida",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadFieldViolation {
    TooShort,
    TooLong,
    InvalidFormat,
}

impl From<LeadTextLengthError> for LeadFieldViolation {
    fn from(value: LeadTextLengthError) -> Self {
        match value {
            LeadTextLengthError::TooShort => Self::TooShort,
            LeadTextLengthError::TooLong => Self::TooLong,
        }
    }
}

impl From<EmailAddressError> for LeadFieldViolation {
    fn from(value: EmailAddressError) -> Self {
        match value {
            EmailAddressError::RegexViolated => Self::InvalidFormat,
        }
    }
}

impl From<LeadWhatsappError> for LeadFieldViolation {
    fn from(value: LeadWhatsappError) -> Self {
        match value {
            LeadWhatsappError::RegexViolated => Self::InvalidFormat,
        }
    }
}

/// Violations found while validating a [`LeadFormInput`], at most one per
/// field.
///
/// Serializes to a map from field name to the inline message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFieldErrors(BTreeMap<LeadField, LeadFieldViolation>);

impl LeadFieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: LeadField, violation: LeadFieldViolation) {
        self.0.insert(field, violation);
    }

    pub fn get(&self, field: LeadField) -> Option<LeadFieldViolation> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: LeadField) -> Option<&'static str> {
        self.get(field)
            .map(|violation| field.violation_message(violation))
    }

    pub fn contains(&self, field: LeadField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = LeadField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadField, LeadFieldViolation)> + '_ {
        self.0.iter().map(|(&field, &violation)| (field, violation))
    }
}

impl FromIterator<(LeadField, LeadFieldViolation)> for LeadFieldErrors {
    fn from_iter<T: IntoIterator<Item = (LeadField, LeadFieldViolation)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for LeadFieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(
            self.iter()
                .map(|(field, violation)| (field, field.violation_message(violation))),
        )
    }
}

impl fmt::Display for LeadFieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, violation)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {}", field.violation_message(violation))?;
        }
        Ok(())
    }
}
