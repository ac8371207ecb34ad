use crate::banks::{lookup_bank, SLOVAK_BANKS};
use crate::checksum::check_digits;
use crate::models::IbanRecord;
use crate::structure::COUNTRY_CODE;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Digits after the bank code: 6-digit prefix and 10-digit account number.
const ACCOUNT_DIGITS: usize = 16;
/// Not assigned to any Slovak bank.
const UNASSIGNED_BANK_CODE: &str = "9900";

pub struct GeneratorConfig {
    pub count: usize,
    pub bank_code: Option<String>,
    pub invalid_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Corruption {
    CheckDigits,
    CountryCode,
    Truncated,
    LetterInBody,
    UnknownBank,
}

pub fn generate_records(config: &GeneratorConfig, seed: u64) -> Result<Vec<IbanRecord>, String> {
    validate_config(config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut records = Vec::with_capacity(config.count);
    for idx in 0..config.count {
        let bank_code = match config.bank_code.as_deref() {
            Some(code) => code.to_string(),
            None => pick_bank_code(&mut rng),
        };
        let valid = generate_iban(&mut rng, &bank_code)?;
        let iban = if rng.gen_bool(config.invalid_ratio) {
            let corruption = pick_corruption(&mut rng);
            corrupt_iban(&mut rng, &valid, corruption)?
        } else {
            valid
        };
        records.push(IbanRecord {
            id: Some((idx + 1).to_string()),
            iban,
        });
    }

    log::debug!("generated {} IBAN(s) with seed {}", records.len(), seed);
    Ok(records)
}

/// Valid IBANs only; convenience over [`generate_records`].
pub fn generate_ibans(
    count: usize,
    seed: u64,
    bank_code: Option<&str>,
) -> Result<Vec<String>, String> {
    let config = GeneratorConfig {
        count,
        bank_code: bank_code.map(str::to_string),
        invalid_ratio: 0.0,
    };
    Ok(generate_records(&config, seed)?
        .into_iter()
        .map(|record| record.iban)
        .collect())
}

fn validate_config(config: &GeneratorConfig) -> Result<(), String> {
    if config.count == 0 {
        return Err("count must be greater than 0".to_string());
    }
    if !(0.0..=1.0).contains(&config.invalid_ratio) {
        return Err("invalid_ratio must be 0..1".to_string());
    }
    if let Some(code) = config.bank_code.as_deref() {
        if lookup_bank(code).is_none() {
            return Err(format!("unknown bank code: {}", code));
        }
    }
    Ok(())
}

fn pick_bank_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    SLOVAK_BANKS
        .choose(rng)
        .map(|(code, _)| *code)
        .unwrap_or("1100")
        .to_string()
}

fn pick_corruption<R: Rng + ?Sized>(rng: &mut R) -> Corruption {
    let options = [
        Corruption::CheckDigits,
        Corruption::CountryCode,
        Corruption::Truncated,
        Corruption::LetterInBody,
        Corruption::UnknownBank,
    ];
    *options.choose(rng).unwrap_or(&Corruption::CheckDigits)
}

fn generate_iban<R: Rng + ?Sized>(rng: &mut R, bank_code: &str) -> Result<String, String> {
    let bban = format!("{}{}", bank_code, random_digits(rng, ACCOUNT_DIGITS));
    build_iban(&bban)
}

fn build_iban(bban: &str) -> Result<String, String> {
    let check = check_digits(COUNTRY_CODE, bban)
        .ok_or_else(|| format!("cannot compute check digits for {}", bban))?;
    Ok(format!("{}{}{}", COUNTRY_CODE, check, bban))
}

/// Breaks exactly one property of a valid IBAN.
fn corrupt_iban<R: Rng + ?Sized>(
    rng: &mut R,
    iban: &str,
    corruption: Corruption,
) -> Result<String, String> {
    match corruption {
        Corruption::CheckDigits => {
            // any shift below 97 moves the remainder away from 1
            let check: u32 = iban[2..4].parse().map_err(|_| "invalid check digits".to_string())?;
            let shifted = if check >= 98 { 2 } else { check + 1 };
            Ok(format!("{}{:02}{}", &iban[..2], shifted, &iban[4..]))
        }
        Corruption::CountryCode => Ok(format!("CZ{}", &iban[2..])),
        Corruption::Truncated => Ok(iban[..iban.len() - 1].to_string()),
        Corruption::LetterInBody => {
            let position = rng.gen_range(4..iban.len());
            let letter = char::from(b'A' + rng.gen_range(0..26u8));
            let mut out = String::with_capacity(iban.len());
            out.push_str(&iban[..position]);
            out.push(letter);
            out.push_str(&iban[position + 1..]);
            Ok(out)
        }
        Corruption::UnknownBank => build_iban(&format!("{}{}", UNASSIGNED_BANK_CODE, &iban[8..])),
    }
}

fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let digit = rng.gen_range(0..10);
        out.push(char::from(b'0' + digit as u8));
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::IbanError;
    use crate::validator::detect;

    #[test]
    fn test_generated_ibans_are_valid() {
        let ibans = generate_ibans(200, 7, None).unwrap();
        assert_eq!(ibans.len(), 200);
        for iban in ibans {
            let detection = detect(&iban);
            assert!(detection.is_valid(), "{} -> {:?}", iban, detection.errors);
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        assert_eq!(
            generate_ibans(10, 42, None).unwrap(),
            generate_ibans(10, 42, None).unwrap()
        );
        assert_ne!(
            generate_ibans(10, 42, None).unwrap(),
            generate_ibans(10, 43, None).unwrap()
        );
    }

    #[test]
    fn test_fixed_bank() {
        for iban in generate_ibans(20, 1, Some("0900")).unwrap() {
            assert_eq!(&iban[4..8], "0900");
        }
        assert!(generate_ibans(1, 1, Some("9900")).is_err());
        assert!(generate_ibans(0, 1, None).is_err());
    }

    #[test]
    fn test_corruptions_break_one_property() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let valid = "SK8011000000002611803119";
        let cases = [
            (Corruption::CheckDigits, vec![IbanError::InvalidChecksum]),
            (
                Corruption::UnknownBank,
                vec![IbanError::UnknownBankCode {
                    code: "9900".to_string(),
                }],
            ),
        ];
        for (corruption, expected) in cases {
            let iban = corrupt_iban(&mut rng, valid, corruption).unwrap();
            assert_eq!(detect(&iban).errors, expected, "{:?}", corruption);
        }
        for corruption in [
            Corruption::CountryCode,
            Corruption::Truncated,
            Corruption::LetterInBody,
        ] {
            let iban = corrupt_iban(&mut rng, valid, corruption).unwrap();
            assert!(!detect(&iban).is_valid(), "{:?}", corruption);
        }
    }

    #[test]
    fn test_invalid_ratio() {
        let config = GeneratorConfig {
            count: 50,
            bank_code: None,
            invalid_ratio: 1.0,
        };
        let records = generate_records(&config, 11).unwrap();
        assert!(records.iter().all(|record| !detect(&record.iban).is_valid()));
        assert_eq!(records[0].id.as_deref(), Some("1"));

        let config = GeneratorConfig {
            count: 1,
            bank_code: None,
            invalid_ratio: 1.5,
        };
        assert!(generate_records(&config, 11).is_err());
    }
}
