use shared::utils::brazilian_format::{format_brl, format_decimal};

const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;
const THOUSAND: f64 = 1e3;

/// Shortens large amounts for list views: `R$ 1,50 bi`, `R$ 2,35 mi`,
/// `R$ 12,00 mil`. Amounts below one thousand (negatives included) get the
/// full `format_brl` rendering. A missing value renders as an empty string.
pub fn abbreviate_large_currency(value: Option<f64>) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let scaled = [(BILLION, "bi"), (MILLION, "mi"), (THOUSAND, "mil")]
        .into_iter()
        .find(|(threshold, _)| value >= *threshold);

    match scaled {
        Some((threshold, suffix)) => {
            format!("R$ {} {}", format_decimal(value / threshold, 2), suffix)
        }
        None => format_brl(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_is_blank() {
        assert_eq!(abbreviate_large_currency(None), "");
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(abbreviate_large_currency(Some(1_500_000_000.0)), "R$ 1,50 bi");
        assert_eq!(abbreviate_large_currency(Some(2_350_000.0)), "R$ 2,35 mi");
        assert_eq!(abbreviate_large_currency(Some(12_000.0)), "R$ 12,00 mil");
        assert_eq!(abbreviate_large_currency(Some(1_000.0)), "R$ 1,00 mil");
    }

    #[test]
    fn test_small_and_negative_amounts_unabbreviated() {
        assert_eq!(abbreviate_large_currency(Some(999.99)), "R$ 999,99");
        assert_eq!(abbreviate_large_currency(Some(0.0)), "R$ 0,00");
        assert_eq!(abbreviate_large_currency(Some(-5_000_000.0)), "-R$ 5.000.000,00");
    }

    #[test]
    fn test_huge_amounts_stay_in_billions() {
        assert_eq!(abbreviate_large_currency(Some(12_345e9)), "R$ 12345,00 bi");
    }
}
