//! Indian-rupee formatting: `₹` prefix, lakh/crore digit grouping, at most two
//! decimals with trailing zeros dropped.

/// `1234567.0` → `₹12,34,567`; `12500.5` → `₹12,500.5`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let paise = (amount.abs() * 100.0).round() as u64;
    let rupees = group_indian(paise / 100);
    let fraction = match paise % 100 {
        0 => String::new(),
        p => format!(".{}", format!("{p:02}").trim_end_matches('0')),
    };
    format!("{sign}₹{rupees}{fraction}")
}

/// Last three digits, then groups of two.
fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(999.0), "₹999");
        assert_eq!(format_inr(1000.0), "₹1,000");
        assert_eq!(format_inr(123456.0), "₹1,23,456");
        assert_eq!(format_inr(10_000_000.0), "₹1,00,00,000");
    }

    #[test]
    fn test_fraction_is_trimmed() {
        assert_eq!(format_inr(12500.5), "₹12,500.5");
        assert_eq!(format_inr(8500.25), "₹8,500.25");
        assert_eq!(format_inr(8500.004), "₹8,500");
    }

    #[test]
    fn test_negative_and_non_finite() {
        assert_eq!(format_inr(-1500.0), "-₹1,500");
        assert_eq!(format_inr(f64::NAN), "₹0");
    }
}
