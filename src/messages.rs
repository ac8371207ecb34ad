use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Sk,
    En,
}

pub const SUPPORTED_LANGUAGES: &[Language] = &[Language::Sk, Language::En];

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Sk => "sk",
            Language::En => "en",
        }
    }

    /// Accepts `sk`/`en` in any case, with an optional region suffix (`en-GB`, `sk_SK`).
    pub fn parse(value: &str) -> Option<Self> {
        let lower = value.trim().to_ascii_lowercase();
        match lower.split(['-', '_']).next().unwrap_or("") {
            "sk" => Some(Language::Sk),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Language::Sk => &SK,
            Language::En => &EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Language::parse(value).ok_or_else(|| format!("unsupported language: {}", value))
    }
}

/// Message templates for one language.
pub struct Messages {
    pub invalid_length: fn(usize, usize) -> String,
    pub invalid_country_code: fn(&str, &str) -> String,
    pub invalid_format: &'static str,
    pub unknown_bank_code: fn(&str) -> String,
    pub invalid_checksum: &'static str,
}

static SK: Messages = Messages {
    invalid_length: sk_invalid_length,
    invalid_country_code: sk_invalid_country_code,
    invalid_format: "Nesprávny formát: IBAN by mal obsahovať iba číslice za kódom krajiny",
    unknown_bank_code: sk_unknown_bank_code,
    invalid_checksum: "Nesprávny kontrolný súčet",
};

static EN: Messages = Messages {
    invalid_length: en_invalid_length,
    invalid_country_code: en_invalid_country_code,
    invalid_format: "Invalid format: IBAN should contain only digits after country code",
    unknown_bank_code: en_unknown_bank_code,
    invalid_checksum: "Invalid checksum",
};

fn sk_invalid_length(expected: usize, got: usize) -> String {
    format!("Nesprávna dĺžka: očakávaných {} znakov, zadaných {}", expected, got)
}

fn sk_invalid_country_code(expected: &str, got: &str) -> String {
    format!("Nesprávny kód krajiny: očakávaný {}, zadaný {}", expected, got)
}

fn sk_unknown_bank_code(code: &str) -> String {
    format!("Neznámy kód banky: {}", code)
}

fn en_invalid_length(expected: usize, got: usize) -> String {
    format!("Invalid length: expected {} characters, got {}", expected, got)
}

fn en_invalid_country_code(expected: &str, got: &str) -> String {
    format!("Invalid country code: expected {}, got {}", expected, got)
}

fn en_unknown_bank_code(code: &str) -> String {
    format!("Unknown bank code: {}", code)
}
