//! ISO 7064 MOD 97-10 over IBANs.
//!
//! The expanded digit string of an IBAN is far wider than any native integer,
//! so the remainder is carried forward chunk by chunk:
//! `(a * 10^k + b) mod 97 == ((a mod 97) * 10^k + b) mod 97`.
//! Prefixing the running remainder's decimal digits to the next chunk is that
//! same `* 10^k` scaling, so the result equals exact big-integer arithmetic.

/// Widest chunk appended to the running remainder. Two remainder digits plus
/// seven chunk digits stay below `u32::MAX`.
const CHUNK_DIGITS: usize = 7;

/// True when the rearranged, letter-expanded IBAN is congruent to 1 mod 97.
///
/// Inputs shorter than four characters cannot be rearranged and are rejected
/// outright, as is any character other than an ASCII digit or `A`-`Z`.
pub fn is_valid_checksum(normalized: &str) -> bool {
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() < 4 {
        return false;
    }
    let rearranged = chars[4..].iter().chain(chars[..4].iter()).copied();
    match expand_digits(rearranged).and_then(|digits| mod97(&digits)) {
        Some(remainder) => remainder == 1,
        None => false,
    }
}

/// Check digits for `country` + `bban`, computed as `98 - mod97(bban + country + "00")`.
pub fn check_digits(country: &str, bban: &str) -> Option<String> {
    if country.len() != 2 {
        return None;
    }
    let combined = format!("{}{}00", bban, country);
    let digits = expand_digits(combined.chars())?;
    let remainder = mod97(&digits)?;
    Some(format!("{:02}", 98 - remainder))
}

/// Replaces `A`..`Z` with `10`..`35` and keeps ASCII digits.
fn expand_digits(chars: impl Iterator<Item = char>) -> Option<String> {
    let mut out = String::new();
    for ch in chars {
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if ch.is_ascii_uppercase() {
            let value = ch as u32 - 'A' as u32 + 10;
            out.push_str(&value.to_string());
        } else {
            return None;
        }
    }
    Some(out)
}

/// Remainder of an arbitrarily long decimal digit string divided by 97.
pub fn mod97(digits: &str) -> Option<u32> {
    let mut remainder: u32 = 0;
    for chunk in digits.as_bytes().chunks(CHUNK_DIGITS) {
        let chunk = std::str::from_utf8(chunk).ok()?;
        if !chunk.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let combined = format!("{}{}", remainder, chunk);
        remainder = combined.parse::<u32>().ok()? % 97;
    }
    Some(remainder)
}
