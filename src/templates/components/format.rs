use crate::domain::property::ListingType;
use chrono::NaiveDate;

pub const CURRENCY: &str = "Toman";

/// 1234567 -> "1,234,567"
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_price(price: u64, listing: ListingType) -> String {
    match listing {
        ListingType::Buy => format!("{} {CURRENCY}", group_thousands(price)),
        ListingType::Rent => format!("{} {CURRENCY}/month", group_thousands(price)),
    }
}

pub fn format_amount(amount: u64) -> String {
    format!("{} {CURRENCY}", group_thousands(amount))
}

pub fn format_size(size: u32) -> String {
    format!("{size} m²")
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Lowercase, ASCII word characters only, runs of separators collapsed to "-".
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_dash = true;
        }
    }
    slug
}

/// Cuts `text` to `max_chars` characters and appends "..." when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(12_500_000_000), "12,500,000,000");
    }

    #[test]
    fn rent_prices_are_monthly() {
        assert_eq!(format_price(45_000_000, ListingType::Rent), "45,000,000 Toman/month");
        assert_eq!(format_price(1_500, ListingType::Buy), "1,500 Toman");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Market Trends & Tips"), "market-trends-tips");
        assert_eq!(slugify("  Shahrak-e Gharb "), "shahrak-e-gharb");
    }

    #[test]
    fn truncate_only_when_longer() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long sentence here", 6), "a long...");
    }

    #[test]
    fn long_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "March 5, 2024");
    }
}
