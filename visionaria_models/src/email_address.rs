use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::macros::nutype_string;

/// `local@domain.tld`: dot-separated local part that does not end with an
/// apostrophe, at least one domain label before a top-level label of two or
/// more letters, no whitespace.
pub static EMAIL_ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([A-Za-z0-9_'+\-]+\.)*[A-Za-z0-9_'+\-]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$",
    )
    .unwrap()
});

nutype_string!(EmailAddress(validate(regex = EMAIL_ADDRESS_REGEX)));

impl EmailAddress {
    pub fn mailto(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("mailto:{}", self.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn email_grammar() {
        for (input, expected) in [
            ("ana@example.com", true),
            ("ana.souza+vistoria@mail.example.com.br", true),
            ("o'neil@example.org", true),
            ("ana'@example.com", false),
            ("ana'.souza@example.com", true),
            ("not-an-email", false),
            ("ana@localhost", false),
            ("ana @example.com", false),
            ("ana@exa mple.com", false),
            ("@example.com", false),
            ("ana@.com", false),
            ("ana..souza@example.com", false),
            ("ana@example.c", false),
            ("", false),
        ] {
            assert_eq!(EmailAddress::try_new(input).is_ok(), expected, "{input}");
        }
    }

    #[test]
    fn mailto() {
        let email = EmailAddress::try_new("visionariaev@gmail.com").unwrap();

        assert_eq!(email.mailto().unwrap().as_str(), "mailto:visionariaev@gmail.com");
    }
}
