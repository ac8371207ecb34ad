use crate::error::IbanError;

pub const IBAN_LENGTH: usize = 24;
pub const COUNTRY_CODE: &str = "SK";

/// Runs the length, country code and format checks on a normalized IBAN.
/// Every failing check pushes its own error; no check depends on another.
pub fn check_structure(normalized: &str, errors: &mut Vec<IbanError>) {
    let length = normalized.chars().count();
    if length != IBAN_LENGTH {
        errors.push(IbanError::InvalidLength {
            expected: IBAN_LENGTH,
            got: length,
        });
    }

    if !normalized.starts_with(COUNTRY_CODE) {
        errors.push(IbanError::InvalidCountryCode {
            expected: COUNTRY_CODE,
            got: normalized.chars().take(2).collect(),
        });
    }

    if !has_digit_body(normalized) {
        errors.push(IbanError::InvalidFormat);
    }
}

/// `SK` followed by exactly 22 ASCII digits.
fn has_digit_body(normalized: &str) -> bool {
    match normalized.strip_prefix(COUNTRY_CODE) {
        Some(body) => {
            body.len() == IBAN_LENGTH - COUNTRY_CODE.len()
                && body.chars().all(|ch| ch.is_ascii_digit())
        }
        None => false,
    }
}
