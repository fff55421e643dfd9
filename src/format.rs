//! Currency and count formatting for display
//!
//! Whole-unit USD with thousands separators, matching en-US formatting with
//! zero fraction digits. Formatting is presentation only; nothing in the
//! projection itself depends on it.

/// Format a whole-unit currency amount: 980 -> "$980", 12300 -> "$12,300"
///
/// Negative amounts render as "-$N".
pub fn format_currency(value: i64) -> String {
    if value < 0 {
        format!("-${}", group_thousands(value.unsigned_abs()))
    } else {
        format!("${}", group_thousands(value as u64))
    }
}

/// Abbreviated currency for axis ticks: values at or above $1,000 render
/// as "$Nk" (rounded to the nearest thousand), smaller values exactly
pub fn format_currency_abbrev(value: i64) -> String {
    if value >= 1000 {
        format!("${}k", (value as f64 / 1000.0).round() as i64)
    } else if value <= -1000 {
        format!("-${}k", (value.unsigned_abs() as f64 / 1000.0).round() as u64)
    } else {
        format_currency(value)
    }
}

/// Format a count with thousands separators: 1234 -> "1,234"
pub fn format_count(value: i64) -> String {
    if value < 0 {
        format!("-{}", group_thousands(value.unsigned_abs()))
    } else {
        group_thousands(value as u64)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_whole_units() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(980), "$980");
        assert_eq!(format_currency(12_300), "$12,300");
        assert_eq!(format_currency(1_234_567), "$1,234,567");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-490), "-$490");
        assert_eq!(format_currency(-12_300), "-$12,300");
    }

    #[test]
    fn test_format_currency_abbrev() {
        assert_eq!(format_currency_abbrev(980), "$980");
        assert_eq!(format_currency_abbrev(1000), "$1k");
        assert_eq!(format_currency_abbrev(9261), "$9k");
        assert_eq!(format_currency_abbrev(65_660), "$66k");
        assert_eq!(format_currency_abbrev(-2500), "-$3k");
    }

    #[test]
    fn test_format_currency_abbrev_rounds_to_nearest_thousand() {
        assert_eq!(format_currency_abbrev(1499), "$1k");
        assert_eq!(format_currency_abbrev(1500), "$2k");
        assert_eq!(format_currency_abbrev(9500), "$10k");
        assert_eq!(format_currency_abbrev(12_300), "$12k");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(189), "189");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(-42), "-42");
    }
}
