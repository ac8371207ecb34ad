use crate::banks::BankInfo;
use crate::messages::Language;
use crate::validator::{detect, language};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A Slovak IBAN that passed every check.
///
/// Parsing reports all problems at once. Serializes as the grouped form
/// (`SK80 1100 ...`) and deserializes from any spacing or case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlovakIban {
    normalized: String,
    formatted: String,
    bank: &'static BankInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .errors.join(", "))]
pub struct InvalidIban {
    pub errors: Vec<String>,
}

impl SlovakIban {
    pub fn parse_with(raw: &str, language: Language) -> Result<Self, InvalidIban> {
        let detection = detect(raw);
        match (detection.bank, detection.formatted.clone()) {
            (Some(bank), Some(formatted)) if detection.is_valid() => Ok(Self {
                normalized: detection.normalized,
                formatted,
                bank,
            }),
            _ => Err(InvalidIban {
                errors: detection.render(language, true).errors,
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    pub fn bank(&self) -> &'static BankInfo {
        self.bank
    }

    pub fn bank_code(&self) -> &str {
        &self.normalized[4..8]
    }
}

impl fmt::Display for SlovakIban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

impl FromStr for SlovakIban {
    type Err = InvalidIban;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        SlovakIban::parse_with(raw, language())
    }
}

impl TryFrom<String> for SlovakIban {
    type Error = InvalidIban;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl TryFrom<&str> for SlovakIban {
    type Error = InvalidIban;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl Serialize for SlovakIban {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.formatted)
    }
}

impl<'de> Deserialize<'de> for SlovakIban {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        SlovakIban::try_from(raw).map_err(serde::de::Error::custom)
    }
}
