// Brazilian number and document formatting shared across the workspace.

pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use std::str::FromStr;

    /// Keeps ASCII digits only, in order. Any other character (including
    /// non-ASCII digit forms) is treated as formatting and dropped.
    pub fn only_digits(raw: &str) -> String {
        raw.chars().filter(char::is_ascii_digit).collect()
    }

    /// Applies the usual mask for a CPF (11 digits), CNPJ (14) or CEP (8).
    /// Anything else is returned as given.
    pub fn format_document(raw: &str) -> String {
        let d = only_digits(raw);
        match d.len() {
            11 => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
            14 => format!("{}.{}.{}/{}-{}", &d[..2], &d[2..5], &d[5..8], &d[8..12], &d[12..]),
            8 => format!("{}-{}", &d[..5], &d[5..]),
            _ => raw.to_string(),
        }
    }

    // Parses decimals like "1.234,56" or "123,45" into f64
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let normalized = s
            .trim()
            .trim_start_matches("R$")
            .trim()
            .replace('.', "") // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        f64::from_str(&normalized).map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

    /// Fixed-point rendering with a comma decimal separator and no grouping.
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        let formatted = format!("{:.decimals$}", value, decimals = decimals);
        formatted.replace('.', ",")
    }

    /// `R$ 1.234.567,89`. Negative amounts are prefixed with `-`.
    pub fn format_brl(value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let fixed = format!("{:.2}", value.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
        format!("{}R$ {},{}", sign, group_thousands(int_part), frac_part)
    }

    fn group_thousands(digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        out
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_only_digits_strips_formatting() {
            assert_eq!(only_digits("11.222.333/0001-81"), "11222333000181");
            assert_eq!(only_digits("abc"), "");
            assert_eq!(only_digits(""), "");
        }

        #[test]
        fn test_only_digits_drops_non_ascii_digits() {
            // Full-width and Arabic-Indic digits are not ASCII digits.
            assert_eq!(only_digits("１２3٤5"), "35");
        }

        #[test]
        fn test_only_digits_is_idempotent() {
            let once = only_digits("00.000.000/0001-91");
            assert_eq!(once, "00000000000191");
            assert_eq!(only_digits(&once), once);
        }

        #[test]
        fn test_format_document_masks() {
            assert_eq!(format_document("11222333000181"), "11.222.333/0001-81");
            assert_eq!(format_document("52998224725"), "529.982.247-25");
            assert_eq!(format_document("01310100"), "01310-100");
            assert_eq!(format_document("11.222.333/0001-81"), "11.222.333/0001-81");
        }

        #[test]
        fn test_format_document_unknown_length_passthrough() {
            assert_eq!(format_document("12-34"), "12-34");
            assert_eq!(format_document(""), "");
        }

        #[test]
        fn test_parse_decimal_simple() {
            assert_eq!(parse_decimal("123,45").unwrap(), 123.45);
        }

        #[test]
        fn test_parse_decimal_with_thousands_and_symbol() {
            assert_eq!(parse_decimal("1.234,56").unwrap(), 1234.56);
            assert_eq!(parse_decimal("R$ 600.822.115,84").unwrap(), 600822115.84);
        }

        #[test]
        fn test_parse_decimal_invalid() {
            assert!(parse_decimal("doze reais").is_err());
        }

        #[test]
        fn test_format_decimal_uses_comma() {
            assert_eq!(format_decimal(1.5, 2), "1,50");
            assert_eq!(format_decimal(2.345, 1), "2,3");
        }

        #[test]
        fn test_format_brl() {
            assert_eq!(format_brl(0.0), "R$ 0,00");
            assert_eq!(format_brl(999.9), "R$ 999,90");
            assert_eq!(format_brl(1234.5), "R$ 1.234,50");
            assert_eq!(format_brl(1234567.891), "R$ 1.234.567,89");
            assert_eq!(format_brl(-1.0), "-R$ 1,00");
            assert_eq!(format_brl(-0.001), "R$ 0,00");
        }
    }
}
