// ============================================================================
// FORMAT HELPERS - Display formatting shared by sync engines and views
// ============================================================================

/// Format a rupee amount for display. Whole amounts drop the decimals
/// ("₹80"), fractional ones keep two ("₹79.50").
pub fn format_price(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("₹{}", value as i64)
    } else {
        format!("₹{:.2}", value)
    }
}

/// Format a discount percentage without trailing zeros ("20", "12.5").
pub fn format_discount(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Short order identifier shown to users: last 6 characters, upper-cased.
pub fn short_order_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    let start = chars.len().saturating_sub(6);
    chars[start..].iter().collect::<String>().to_uppercase()
}

/// Localized delivery date for notifications. Falls back to the raw string
/// when the backend sends something chrono cannot parse.
pub fn format_delivery_date(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}
