// CEP (Código de Endereçamento Postal). There is no check digit, only shape.
use super::{all_same, digit_values, DocumentValidator};
use shared::models::DocumentKind;
use shared::utils::brazilian_format::only_digits;

const CEP_LEN: usize = 8;

pub fn is_valid_cep(raw: &str) -> bool {
    let digits = only_digits(raw);
    digits.len() == CEP_LEN && !all_same(&digit_values(&digits))
}

pub struct Cep;

impl DocumentValidator for Cep {
    fn name(&self) -> &str {
        "CEP"
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Cep
    }

    fn is_valid(&self, raw: &str) -> bool {
        is_valid_cep(raw)
    }
}
