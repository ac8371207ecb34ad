use crate::messages::Language;
use serde::Serialize;

/// A single detected problem with an IBAN, kept free of any wording until it
/// is rendered for a language.
///
/// Variant order is the order in which errors are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IbanError {
    InvalidLength { expected: usize, got: usize },
    InvalidCountryCode { expected: &'static str, got: String },
    InvalidFormat,
    UnknownBankCode { code: String },
    InvalidChecksum,
}

impl IbanError {
    pub fn render(&self, language: Language) -> String {
        let messages = language.messages();
        match self {
            IbanError::InvalidLength { expected, got } => {
                (messages.invalid_length)(*expected, *got)
            }
            IbanError::InvalidCountryCode { expected, got } => {
                (messages.invalid_country_code)(*expected, got.as_str())
            }
            IbanError::InvalidFormat => messages.invalid_format.to_string(),
            IbanError::UnknownBankCode { code } => (messages.unknown_bank_code)(code.as_str()),
            IbanError::InvalidChecksum => messages.invalid_checksum.to_string(),
        }
    }

    /// Short stable label, used for report summaries.
    pub fn label(&self) -> &'static str {
        match self {
            IbanError::InvalidLength { .. } => "invalid_length",
            IbanError::InvalidCountryCode { .. } => "invalid_country_code",
            IbanError::InvalidFormat => "invalid_format",
            IbanError::UnknownBankCode { .. } => "unknown_bank_code",
            IbanError::InvalidChecksum => "invalid_checksum",
        }
    }
}
