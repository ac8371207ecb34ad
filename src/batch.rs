use crate::messages::Language;
use crate::models::{IbanRecord, ReportRow};
use crate::validator::detect;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub total_records: usize,
    pub valid_records: usize,
    pub invalid_records: usize,
    /// Occurrences per error kind, counted before any truncation.
    pub error_counts: BTreeMap<&'static str, usize>,
}

/// Validates every `iban` in the `input` CSV and writes one report row per
/// record to `output`.
pub fn validate_csv(
    input: &Path,
    output: &Path,
    language: Language,
    multiple_errors: bool,
) -> Result<BatchSummary, String> {
    let mut reader = csv::Reader::from_path(input).map_err(|err| err.to_string())?;
    let mut writer = csv::Writer::from_path(output).map_err(|err| err.to_string())?;
    let mut summary = BatchSummary::default();

    for result in reader.deserialize() {
        let record: IbanRecord = result.map_err(|err| err.to_string())?;
        summary.total_records += 1;

        let detection = detect(&record.iban);
        for err in &detection.errors {
            *summary.error_counts.entry(err.label()).or_insert(0) += 1;
        }
        let rendered = detection.render(language, multiple_errors);
        if rendered.valid {
            summary.valid_records += 1;
        } else {
            summary.invalid_records += 1;
        }

        writer
            .serialize(ReportRow {
                id: record.id,
                iban: record.iban,
                valid: rendered.valid,
                formatted: rendered.formatted,
                bank_name: rendered.bank_name,
                bank_swift: rendered.bank_swift,
                errors: rendered.errors.join("; "),
            })
            .map_err(|err| err.to_string())?;
    }

    writer.flush().map_err(|err| err.to_string())?;
    log::debug!(
        "validated {} record(s) from {}",
        summary.total_records,
        input.display()
    );
    Ok(summary)
}
