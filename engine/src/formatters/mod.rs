// Display formatters for list and form fields.
pub mod currency;
pub mod status;

pub use currency::abbreviate_large_currency;
pub use status::{indicator_color, render_status_indicator, IndicatorColor};
