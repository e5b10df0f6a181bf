use serde::Serialize;
use shared::models::TenderStatus;
use std::fmt;

/// CSS indicator classes understood by the host framework's list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorColor {
    Blue,
    Orange,
    Yellow,
    Green,
    DarkGreen,
    Red,
    Gray,
}

impl IndicatorColor {
    pub fn css_class(self) -> &'static str {
        match self {
            IndicatorColor::Blue => "blue",
            IndicatorColor::Orange => "orange",
            IndicatorColor::Yellow => "yellow",
            IndicatorColor::Green => "green",
            IndicatorColor::DarkGreen => "darkgreen",
            IndicatorColor::Red => "red",
            IndicatorColor::Gray => "gray",
        }
    }
}

impl fmt::Display for IndicatorColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

impl From<TenderStatus> for IndicatorColor {
    fn from(status: TenderStatus) -> Self {
        match status {
            TenderStatus::EmPreparacao => IndicatorColor::Blue,
            TenderStatus::Publicado => IndicatorColor::Orange,
            TenderStatus::EmAnalise => IndicatorColor::Yellow,
            TenderStatus::Adjudicado | TenderStatus::Homologado => IndicatorColor::Green,
            TenderStatus::Contratado | TenderStatus::Concluido => IndicatorColor::DarkGreen,
            TenderStatus::Revogado
            | TenderStatus::Anulado
            | TenderStatus::Fracassado
            | TenderStatus::Deserto => IndicatorColor::Red,
        }
    }
}

/// Unknown labels fall back to gray.
pub fn indicator_color(label: &str) -> IndicatorColor {
    label
        .parse::<TenderStatus>()
        .map(IndicatorColor::from)
        .unwrap_or(IndicatorColor::Gray)
}

/// `<span class="indicator {color}">{label}</span>`, or an empty string for an
/// empty label. The label is HTML-escaped.
pub fn render_status_indicator(label: &str) -> String {
    if label.is_empty() {
        return String::new();
    }
    format!(
        r#"<span class="indicator {}">{}</span>"#,
        indicator_color(label),
        escape_html(label)
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
