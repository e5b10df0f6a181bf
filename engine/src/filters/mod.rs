// Menu presets shown when a list view loads. These are plain data; the host
// framework applies them.
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use serde_json::{json, Value};
use shared::models::TenderStatus;

pub const PUBLIC_BUDGET: &str = "Public Budget";
pub const PUBLIC_TENDER: &str = "Public Tender";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterOperator {
    Like,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "not in")]
    NotIn,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListFilter {
    pub field: String,
    pub operator: FilterOperator,
    pub value: Value,
}

impl ListFilter {
    pub fn new(field: &str, operator: FilterOperator, value: Value) -> Self {
        Self {
            field: field.to_string(),
            operator,
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub label: String,
    /// Drop filters already applied before adding these.
    pub clear_existing: bool,
    pub filters: Vec<ListFilter>,
}

/// Presets for a doctype's list view. Unknown doctypes get none.
pub fn presets_for(doctype: &str, today: NaiveDate) -> Vec<MenuItem> {
    match doctype {
        PUBLIC_BUDGET => vec![current_fiscal_year(today)],
        PUBLIC_TENDER => vec![active_tenders(), closed_tenders()],
        _ => Vec::new(),
    }
}

pub fn current_fiscal_year(today: NaiveDate) -> MenuItem {
    MenuItem {
        label: "Filtrar por Ano Fiscal Atual".to_string(),
        clear_existing: false,
        filters: vec![ListFilter::new("Fiscal Year", FilterOperator::Like, json!(today.year()))],
    }
}

pub fn active_tenders() -> MenuItem {
    MenuItem {
        label: "Mostrar Licitações Ativas".to_string(),
        clear_existing: true,
        filters: vec![ListFilter::new("status", FilterOperator::NotIn, closed_labels())],
    }
}

pub fn closed_tenders() -> MenuItem {
    MenuItem {
        label: "Mostrar Licitações Encerradas".to_string(),
        clear_existing: true,
        filters: vec![ListFilter::new("status", FilterOperator::In, closed_labels())],
    }
}

fn closed_labels() -> Value {
    Value::from(TenderStatus::closed().map(TenderStatus::label).collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_budget_uses_current_year() {
        let items = presets_for(PUBLIC_BUDGET, day(2025, 3, 14));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].filters[0].field, "Fiscal Year");
        assert_eq!(items[0].filters[0].operator, FilterOperator::Like);
        assert_eq!(items[0].filters[0].value, json!(2025));
        assert!(!items[0].clear_existing);
    }

    #[test]
    fn test_tender_presets() {
        let items = presets_for(PUBLIC_TENDER, day(2025, 1, 1));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Mostrar Licitações Ativas");
        assert_eq!(items[0].filters[0].operator, FilterOperator::NotIn);
        assert_eq!(items[1].filters[0].operator, FilterOperator::In);
        assert!(items.iter().all(|i| i.clear_existing));
        assert_eq!(
            items[1].filters[0].value,
            json!(["Concluído", "Revogado", "Anulado", "Fracassado", "Deserto"])
        );
    }

    #[test]
    fn test_unknown_doctype() {
        assert!(presets_for("Supplier", day(2025, 1, 1)).is_empty());
    }

    #[test]
    fn test_operator_serialization() {
        let filter = ListFilter::new("status", FilterOperator::NotIn, json!([]));
        let v = serde_json::to_value(&filter).unwrap();
        assert_eq!(v["operator"], "not in");
        assert_eq!(serde_json::to_value(FilterOperator::Like).unwrap(), "Like");
    }
}
