// Identifier validators. Every check folds any malformed input into `false`;
// none of them allocate beyond the normalized digit string or ever panic.
pub mod cep;
pub mod cnpj;
pub mod cpf;

pub use cep::{is_valid_cep, Cep};
pub use cnpj::{is_valid_cnpj, is_valid_cnpj_opt, Cnpj};
pub use cpf::{is_valid_cpf, Cpf};

use crate::error::{EngineError, Result};
use shared::models::DocumentKind;

// Common trait for all identifier validators
pub trait DocumentValidator: Send + Sync {
    fn name(&self) -> &str;
    fn kind(&self) -> DocumentKind;
    fn is_valid(&self, raw: &str) -> bool;

    /// Absent input is never valid.
    fn is_valid_opt(&self, raw: Option<&str>) -> bool {
        raw.is_some_and(|value| self.is_valid(value))
    }
}

pub fn validator_for(kind: DocumentKind) -> &'static dyn DocumentValidator {
    match kind {
        DocumentKind::Cnpj => &Cnpj,
        DocumentKind::Cpf => &Cpf,
        DocumentKind::Cep => &Cep,
    }
}

/// Detects the kind from the digit count and validates accordingly.
pub fn validate_any(raw: &str) -> bool {
    check(raw).1
}

/// Detected kind (if any) alongside the validity of `raw` for that kind.
pub fn check(raw: &str) -> (Option<DocumentKind>, bool) {
    let kind = DocumentKind::detect(raw);
    (kind, kind.is_some_and(|k| validator_for(k).is_valid(raw)))
}

/// Parses a user-supplied kind name (`cnpj`, `cpf`, `cep`, any case).
pub fn parse_kind(name: &str) -> Result<DocumentKind> {
    name.parse::<DocumentKind>()
        .map_err(|_| EngineError::UnknownDocumentKind(name.to_string()))
}

/// Converts normalized ASCII digits into their numeric values.
pub(crate) fn digit_values(digits: &str) -> Vec<u32> {
    digits.bytes().map(|b| u32::from(b - b'0')).collect()
}

pub(crate) fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}
