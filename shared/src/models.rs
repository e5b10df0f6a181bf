use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::brazilian_format::only_digits;

/// Kinds of Brazilian identifiers the engine knows how to check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Legal-entity registry number, 14 digits.
    Cnpj,
    /// Individual taxpayer number, 11 digits.
    Cpf,
    /// Postal code, 8 digits.
    Cep,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [DocumentKind::Cnpj, DocumentKind::Cpf, DocumentKind::Cep];

    /// Number of digits left after stripping formatting.
    pub fn digit_count(self) -> usize {
        match self {
            DocumentKind::Cnpj => 14,
            DocumentKind::Cpf => 11,
            DocumentKind::Cep => 8,
        }
    }

    /// Guesses the kind from the normalized digit count.
    pub fn detect(raw: &str) -> Option<DocumentKind> {
        let len = only_digits(raw).len();
        Self::ALL.into_iter().find(|kind| kind.digit_count() == len)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Cnpj => "cnpj",
            DocumentKind::Cpf => "cpf",
            DocumentKind::Cep => "cep",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cnpj" => Ok(DocumentKind::Cnpj),
            "cpf" => Ok(DocumentKind::Cpf),
            "cep" => Ok(DocumentKind::Cep),
            other => Err(format!("unknown document kind '{}'", other)),
        }
    }
}

// Status labels as they are stored by the host framework (Portuguese).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TenderStatus {
    #[serde(rename = "Em Preparação")]
    EmPreparacao,
    Publicado,
    #[serde(rename = "Em Análise")]
    EmAnalise,
    Adjudicado,
    Homologado,
    Contratado,
    #[serde(rename = "Concluído")]
    Concluido,
    Revogado,
    Anulado,
    Fracassado,
    Deserto,
}

impl TenderStatus {
    pub const ALL: [TenderStatus; 11] = [
        TenderStatus::EmPreparacao,
        TenderStatus::Publicado,
        TenderStatus::EmAnalise,
        TenderStatus::Adjudicado,
        TenderStatus::Homologado,
        TenderStatus::Contratado,
        TenderStatus::Concluido,
        TenderStatus::Revogado,
        TenderStatus::Anulado,
        TenderStatus::Fracassado,
        TenderStatus::Deserto,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TenderStatus::EmPreparacao => "Em Preparação",
            TenderStatus::Publicado => "Publicado",
            TenderStatus::EmAnalise => "Em Análise",
            TenderStatus::Adjudicado => "Adjudicado",
            TenderStatus::Homologado => "Homologado",
            TenderStatus::Contratado => "Contratado",
            TenderStatus::Concluido => "Concluído",
            TenderStatus::Revogado => "Revogado",
            TenderStatus::Anulado => "Anulado",
            TenderStatus::Fracassado => "Fracassado",
            TenderStatus::Deserto => "Deserto",
        }
    }

    /// A closed tender no longer accepts any procurement action.
    pub fn is_closed(self) -> bool {
        matches!(
            self,
            TenderStatus::Concluido
                | TenderStatus::Revogado
                | TenderStatus::Anulado
                | TenderStatus::Fracassado
                | TenderStatus::Deserto
        )
    }

    pub fn closed() -> impl Iterator<Item = TenderStatus> {
        Self::ALL.into_iter().filter(|s| s.is_closed())
    }
}

impl fmt::Display for TenderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TenderStatus {
    type Err = String;

    // Labels must match exactly, accents included.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| format!("unknown tender status '{}'", s))
    }
}
