use crate::banks::{bank_code, lookup_bank, BankInfo};
use crate::checksum::is_valid_checksum;
use crate::error::IbanError;
use crate::format::format_groups;
use crate::messages::Language;
use crate::normalize::normalize;
use crate::structure::check_structure;
use serde::Serialize;
use std::sync::atomic::{AtomicU8, Ordering};

static DEFAULT_LANGUAGE: AtomicU8 = AtomicU8::new(0);

/// Sets the language used by [`validate_iban`] for every later call.
pub fn set_language(language: Language) {
    let value = match language {
        Language::Sk => 0,
        Language::En => 1,
    };
    DEFAULT_LANGUAGE.store(value, Ordering::Relaxed);
    log::debug!("default IBAN message language set to {}", language);
}

pub fn language() -> Language {
    match DEFAULT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::En,
        _ => Language::Sk,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub formatted: Option<String>,
    pub bank_name: Option<String>,
    pub bank_swift: Option<String>,
}

/// Everything found out about an input before any message is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub normalized: String,
    pub errors: Vec<IbanError>,
    pub bank: Option<&'static BankInfo>,
    pub formatted: Option<String>,
}

impl Detection {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Renders the detected errors in `language`. With `multiple_errors`
    /// unset only the first error is kept, while `valid` still reflects all
    /// of them.
    pub fn render(&self, language: Language, multiple_errors: bool) -> ValidationResult {
        let keep = if multiple_errors { self.errors.len() } else { 1 };
        ValidationResult {
            valid: self.is_valid(),
            errors: self
                .errors
                .iter()
                .take(keep)
                .map(|err| err.render(language))
                .collect(),
            formatted: self.formatted.clone(),
            bank_name: self.bank.map(|bank| bank.name.to_string()),
            bank_swift: self.bank.map(|bank| bank.swift.to_string()),
        }
    }
}

/// Runs every check on `raw` and collects typed errors in reporting order:
/// length, country code, format, bank code, checksum.
pub fn detect(raw: &str) -> Detection {
    let normalized = normalize(raw);
    let mut errors = Vec::new();

    check_structure(&normalized, &mut errors);

    let mut bank = None;
    if let Some(code) = bank_code(&normalized) {
        match lookup_bank(&code) {
            Some(info) => bank = Some(info),
            None => errors.push(IbanError::UnknownBankCode { code }),
        }
    }

    if !is_valid_checksum(&normalized) {
        errors.push(IbanError::InvalidChecksum);
    }

    let formatted = format_groups(&normalized);
    log::trace!(
        "checked IBAN input of {} chars: {} error(s)",
        normalized.chars().count(),
        errors.len()
    );

    Detection {
        normalized,
        errors,
        bank,
        formatted,
    }
}

/// A validator whose messages are always rendered in one language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    language: Language,
}

impl Validator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn validate(&self, raw: &str, multiple_errors: bool) -> ValidationResult {
        detect(raw).render(self.language, multiple_errors)
    }
}

/// Validates `raw` with messages in the current default language.
pub fn validate_iban(raw: &str, multiple_errors: bool) -> ValidationResult {
    Validator::new(language()).validate(raw, multiple_errors)
}

#[cfg(test)]
mod test {
    use super::*;

    const VALID: &str = "SK8011000000002611803119";

    fn en() -> Validator {
        Validator::new(Language::En)
    }

    #[test]
    fn test_valid_iban() {
        let result = en().validate(VALID, false);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.formatted.as_deref(), Some("SK80 1100 0000 0026 1180 3119"));
        assert_eq!(result.bank_name.as_deref(), Some("Tatra banka, a.s."));
        assert_eq!(result.bank_swift.as_deref(), Some("TATRSKBX"));
    }

    #[test]
    fn test_formatted_input_is_accepted() {
        let result = en().validate("sk80 1100 0000 0026 1180 3119", true);
        assert!(result.valid);
        assert_eq!(result.formatted.as_deref(), Some("SK80 1100 0000 0026 1180 3119"));
    }

    #[test]
    fn test_wrong_check_digits_keep_enrichment() {
        // check digits 85 give remainder 6
        let result = en().validate("SK8511000000002611803119", true);
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Invalid checksum"]);
        assert_eq!(result.formatted.as_deref(), Some("SK85 1100 0000 0026 1180 3119"));
        assert_eq!(result.bank_name.as_deref(), Some("Tatra banka, a.s."));
        assert_eq!(result.bank_swift.as_deref(), Some("TATRSKBX"));
    }

    #[test]
    fn test_byte_order_mark_prefix_is_valid() {
        let result = en().validate("\u{feff}SK8011000000002611803119", true);
        assert!(result.valid, "{:?}", result.errors);
        assert_eq!(result.formatted.as_deref(), Some("SK80 1100 0000 0026 1180 3119"));
    }

    #[test]
    fn test_short_input_single_error() {
        let result = en().validate("SK311200", false);
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Invalid length: expected 24 characters, got 8"]);
        assert_eq!(result.formatted.as_deref(), Some("SK31 1200"));
        assert_eq!(result.bank_name, None);
    }

    #[test]
    fn test_short_input_all_errors_in_order() {
        let result = en().validate("SK311200", true);
        assert_eq!(
            result.errors,
            vec![
                "Invalid length: expected 24 characters, got 8",
                "Invalid format: IBAN should contain only digits after country code",
                "Unknown bank code: 1200",
                "Invalid checksum",
            ]
        );
    }

    #[test]
    fn test_country_code() {
        let result = en().validate("CZ8511000000002611803119", false);
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Invalid country code: expected SK, got CZ"]);
    }

    #[test]
    fn test_invalid_format() {
        let result = en().validate("SK85AB000000002611803119", true);
        assert!(!result.valid);
        assert_eq!(
            result.errors[0],
            "Invalid format: IBAN should contain only digits after country code"
        );
    }

    #[test]
    fn test_unknown_bank_code() {
        let result = en().validate("SK8599000000002611803119", false);
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Unknown bank code: 9900"]);

        // correct check digits, so the bank code is the only problem
        let result = en().validate("SK7699000000002611803119", true);
        assert_eq!(result.errors, vec!["Unknown bank code: 9900"]);
        assert_eq!(result.bank_name, None);
        assert_eq!(result.bank_swift, None);
    }

    #[test]
    fn test_invalid_checksum() {
        let result = en().validate("SK8011000000002611803118", false);
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Invalid checksum"]);
    }

    #[test]
    fn test_empty_input() {
        let result = en().validate("", true);
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                "Invalid length: expected 24 characters, got 0",
                "Invalid country code: expected SK, got ",
                "Invalid format: IBAN should contain only digits after country code",
                "Invalid checksum",
            ]
        );
        assert_eq!(result.formatted, None);
    }

    #[test]
    fn test_valid_flag_ignores_truncation() {
        let single = en().validate("CZ00", false);
        let multiple = en().validate("CZ00", true);
        assert!(!single.valid);
        assert_eq!(single.valid, multiple.valid);
        assert_eq!(single.errors.len(), 1);
        assert!(multiple.errors.len() > 1);
        assert_eq!(single.errors[0], multiple.errors[0]);
    }

    #[test]
    fn test_language_changes_text_only() {
        let inputs = ["SK311200", VALID, "CZ8511000000002611803119", "", "sk 80"];
        for input in inputs {
            let sk = Validator::new(Language::Sk).validate(input, true);
            let en = en().validate(input, true);
            assert_eq!(sk.valid, en.valid);
            assert_eq!(sk.errors.len(), en.errors.len());
            assert_eq!(sk.formatted, en.formatted);
            assert_eq!(sk.bank_name, en.bank_name);
        }
        let sk = Validator::new(Language::Sk).validate("SK311200", false);
        assert_eq!(sk.errors, vec!["Nesprávna dĺžka: očakávaných 24 znakov, zadaných 8"]);
    }

    #[test]
    fn test_unusual_inputs_do_not_panic() {
        let long = "9".repeat(500);
        let inputs = [
            "ß",
            "ŠK8011000000002611803119",
            "\u{0}\u{1}\u{2}",
            "SK80\u{200b}1100",
            "🙂🙂🙂🙂🙂🙂🙂🙂🙂",
            long.as_str(),
        ];
        for input in inputs {
            let result = en().validate(input, true);
            assert!(!result.valid);
            assert!(!result.errors.is_empty());
        }
    }

    #[test]
    fn test_detection_keeps_typed_errors() {
        let detection = detect("sk311200");
        assert_eq!(detection.normalized, "SK311200");
        assert_eq!(
            detection.errors,
            vec![
                IbanError::InvalidLength {
                    expected: 24,
                    got: 8
                },
                IbanError::InvalidFormat,
                IbanError::UnknownBankCode {
                    code: "1200".to_string()
                },
                IbanError::InvalidChecksum,
            ]
        );
        assert!(detection.bank.is_none());
    }

    #[test]
    fn test_default_language_switch() {
        // the only test in this crate that touches the process-wide language
        assert_eq!(language(), Language::Sk);
        let sk = validate_iban("SK311200", false);
        set_language(Language::En);
        let en = validate_iban("SK311200", false);
        set_language(Language::Sk);
        assert_eq!(sk.valid, en.valid);
        assert_eq!(sk.errors, vec!["Nesprávna dĺžka: očakávaných 24 znakov, zadaných 8"]);
        assert_eq!(en.errors, vec!["Invalid length: expected 24 characters, got 8"]);
        assert_eq!(language(), Language::Sk);
    }
}
