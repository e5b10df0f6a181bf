// CNPJ (Cadastro Nacional da Pessoa Jurídica) check-digit validation.
use super::{all_same, digit_values, DocumentValidator};
use shared::models::DocumentKind;
use shared::utils::brazilian_format::only_digits;

const CNPJ_LEN: usize = 14;

/// Returns `true` iff `raw` is a structurally valid CNPJ.
///
/// Formatting characters (`.`, `/`, `-`, spaces, anything that is not an ASCII
/// digit) are ignored. The remaining digits must number exactly 14, must not
/// all be the same digit, and must end in the two check digits computed with
/// weights 2..=9 cycling right-to-left, modulo 11.
pub fn is_valid_cnpj(raw: &str) -> bool {
    if raw.is_empty() {
        return false;
    }

    let digits = only_digits(raw);
    if digits.len() != CNPJ_LEN {
        return false;
    }

    let d = digit_values(&digits);
    // Rejected before the checksum: "00000000000000" would otherwise pass.
    if all_same(&d) {
        return false;
    }

    d[12] == check_digit(&d[..12]) && d[13] == check_digit(&d[..13])
}

/// Entry point for callers holding an optional value.
pub fn is_valid_cnpj_opt(raw: Option<&str>) -> bool {
    raw.is_some_and(is_valid_cnpj)
}

fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .rev()
        .zip((2u32..=9).cycle())
        .map(|(digit, weight)| digit * weight)
        .sum();
    let check = 11 - sum % 11;
    if check > 9 {
        0
    } else {
        check
    }
}

pub struct Cnpj;

impl DocumentValidator for Cnpj {
    fn name(&self) -> &str {
        "CNPJ"
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Cnpj
    }

    fn is_valid(&self, raw: &str) -> bool {
        is_valid_cnpj(raw)
    }
}
