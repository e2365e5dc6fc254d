//! Display strings for prices, amounts and dates.

use chrono::NaiveDate;

pub const CURRENCY: &str = "₹";

/// `₹30`, `₹12.50`; whole amounts drop the decimals.
pub fn money(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{}{:.0}", CURRENCY, amount)
    } else {
        format!("{}{:.2}", CURRENCY, amount)
    }
}

/// Badge text for an event price: absent and zero are both "Free".
pub fn price_label(price: Option<f64>) -> String {
    match price {
        Some(p) if p > 0.0 => money(p),
        _ => "Free".to_string(),
    }
}

/// `Jun 1, 2025`
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Sunday, June 1, 2025`
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

pub fn seats_left(seats: u32) -> String {
    match seats {
        0 => "Sold Out".to_string(),
        1 => "1 spot left".to_string(),
        n => format!("{} spots left", n),
    }
}

/// Fewer than ten seats left.
pub fn almost_full(seats: u32) -> bool {
    seats > 0 && seats < 10
}

/// MIME type for an upload picked from disk, by extension.
pub fn mime_for_file_name(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
