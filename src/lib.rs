//! Slovak IBAN validation: structure, bank code, MOD 97-10 checksum and
//! grouped formatting, with error messages in Slovak or English.
//!
//! ```
//! use sk_iban::{Language, Validator};
//!
//! let result = Validator::new(Language::En).validate("SK80 1100 0000 0026 1180 3119", false);
//! assert!(result.valid);
//! assert_eq!(result.bank_swift.as_deref(), Some("TATRSKBX"));
//! ```

pub mod banks;
pub mod batch;
pub mod checksum;
pub mod error;
pub mod format;
pub mod generator;
pub mod iban;
pub mod logging;
pub mod messages;
pub mod models;
pub mod normalize;
pub mod structure;
pub mod validator;

pub use banks::{all_banks, lookup_bank, BankInfo};
pub use batch::{validate_csv, BatchSummary};
pub use error::IbanError;
pub use generator::{generate_ibans, generate_records, GeneratorConfig};
pub use iban::{InvalidIban, SlovakIban};
pub use messages::Language;
pub use validator::{detect, language, set_language, validate_iban, ValidationResult, Validator};
