//! Text for the three metric cards.

/// Shown in place of a mean when no listings are selected.
pub const NO_DATA: &str = "—";

/// `300000.0` → `"300,000 €"`.
pub fn format_price(mean: Option<f64>) -> String {
    match mean {
        Some(v) => format!("{} €", group_thousands(v.round() as i64)),
        None => NO_DATA.to_string(),
    }
}

/// `89.6` → `"90 m²"`.
pub fn format_meters(mean: Option<f64>) -> String {
    match mean {
        Some(v) => format!("{:.0} m²", v),
        None => NO_DATA.to_string(),
    }
}

pub fn format_count(count: usize) -> String {
    count.to_string()
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
