// Engine library root
// Identifier validation plus the display helpers and list presets that sit
// around it. The `govnext` binary in main.rs is a thin CLI over these modules.

pub mod config;
pub mod data;
pub mod error;
pub mod filters;
pub mod formatters;
pub mod validation;

pub use error::{EngineError, Result};
pub use validation::{is_valid_cnpj, is_valid_cnpj_opt, is_valid_cpf, is_valid_cep, validate_any};
