//! Label formatting helpers.

/// Format an integer with comma thousands separators (`1000000` -> `1,000,000`).
pub fn format_count(n: usize) -> String {
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

/// Format a price as dollars with two decimals and thousands separators.
pub fn format_price(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc() as usize;
    let frac = (cents % 100.0) as usize;
    format!("{}${}.{:02}", sign, format_count(whole), frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(2_000), "2,000");
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_count(12_345_678), "12,345,678");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(74.164), "$74.16");
        assert_eq!(format_price(105.125), "$105.13");
        assert_eq!(format_price(1234.5), "$1,234.50");
        assert_eq!(format_price(-2.0), "-$2.00");
    }
}
