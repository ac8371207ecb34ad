use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BankInfo {
    pub name: &'static str,
    pub swift: &'static str,
}

const fn bank(name: &'static str, swift: &'static str) -> BankInfo {
    BankInfo { name, swift }
}

/// Slovak bank codes (IBAN positions 5-8), sorted by code.
pub const SLOVAK_BANKS: &[(&str, BankInfo)] = &[
    ("0200", bank("Všeobecná úverová banka, a.s.", "SUBASKBX")),
    ("0720", bank("Národná banka Slovenska", "NBSBSKBX")),
    ("0900", bank("Slovenská sporiteľňa, a.s.", "GIBASKBX")),
    ("1100", bank("Tatra banka, a.s.", "TATRSKBX")),
    ("1111", bank("UniCredit Bank Czech Republic and Slovakia, a.s.", "UNCRSKBX")),
    ("3000", bank("Slovenská záručná a rozvojová banka, a.s.", "SLZBSKBA")),
    ("3100", bank("Volksbank (Ľudová banka), a.s.", "LUBASKBX")),
    ("5200", bank("OTP Banka Slovensko, a.s.", "OTPVSKBX")),
    ("5600", bank("Prima banka Slovensko, a.s.", "KOMASK2X")),
    ("5900", bank("365.bank, a.s.", "POBNSKBA")),
    ("6500", bank("Poštová banka, a.s.", "POBNSKBA")),
    ("7300", bank("J&T Banka, a.s.", "JTBPSKBA")),
    ("7500", bank("Československá obchodná banka, a.s.", "CEKOSKBX")),
    ("8050", bank("Commerzbank AG", "COBASKBX")),
    ("8100", bank("Komerční banka, a.s.", "KOMBSKBA")),
    ("8120", bank("Privatbanka, a.s.", "BSLOSK22")),
    ("8130", bank("BKS Bank AG", "BFKKSKBB")),
    ("8170", bank("Fio banka, a.s.", "FIOZSKBA")),
    ("8330", bank("Citibank Europe plc", "CITISKBA")),
    ("8360", bank("mBank S.A.", "BREXSKBX")),
    ("8370", bank("Oberbank AG", "OBKLSKBA")),
    ("8410", bank("Exponential-e", "RIDBSKBX")),
    ("8420", bank("ING Bank N.V.", "INGBSKBX")),
    ("8430", bank("KDB Bank Europe Ltd.", "KODBSKBX")),
];

pub fn lookup_bank(code: &str) -> Option<&'static BankInfo> {
    SLOVAK_BANKS
        .iter()
        .find(|(bank_code, _)| *bank_code == code)
        .map(|(_, info)| info)
}

pub fn all_banks() -> impl Iterator<Item = (&'static str, &'static BankInfo)> {
    SLOVAK_BANKS.iter().map(|(code, info)| (*code, info))
}

/// Bank code of a normalized IBAN: characters 5 to 8, when the input is long enough.
pub fn bank_code(normalized: &str) -> Option<String> {
    if normalized.chars().count() < 8 {
        return None;
    }
    Some(normalized.chars().skip(4).take(4).collect())
}
