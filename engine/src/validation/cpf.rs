// CPF (Cadastro de Pessoas Físicas) check-digit validation.
use super::{all_same, digit_values, DocumentValidator};
use shared::models::DocumentKind;
use shared::utils::brazilian_format::only_digits;

const CPF_LEN: usize = 11;

/// Returns `true` iff `raw` is a structurally valid CPF. Same normalization and
/// all-same-digit rule as [`super::is_valid_cnpj`]; check digits use
/// descending weights starting at 10 (first) and 11 (second).
pub fn is_valid_cpf(raw: &str) -> bool {
    let digits = only_digits(raw);
    if digits.len() != CPF_LEN {
        return false;
    }

    let d = digit_values(&digits);
    if all_same(&d) {
        return false;
    }

    d[9] == check_digit(&d[..9]) && d[10] == check_digit(&d[..10])
}

fn check_digit(digits: &[u32]) -> u32 {
    let first_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    let check = 11 - sum % 11;
    if check >= 10 {
        0
    } else {
        check
    }
}

pub struct Cpf;

impl DocumentValidator for Cpf {
    fn name(&self) -> &str {
        "CPF"
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Cpf
    }

    fn is_valid(&self, raw: &str) -> bool {
        is_valid_cpf(raw)
    }
}
