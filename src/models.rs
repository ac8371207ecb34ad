use serde::{Deserialize, Serialize};

/// One input row: an IBAN as the user typed it, with an optional caller id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IbanRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub iban: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(default)]
    pub id: Option<String>,
    pub iban: String,
    pub valid: bool,
    #[serde(default)]
    pub formatted: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_swift: Option<String>,
    pub errors: String,
}
