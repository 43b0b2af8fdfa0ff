use chrono::NaiveDate;

/// Format a rupee amount with en-IN digit grouping: the last three integer
/// digits form one group, everything above groups in pairs ("12,34,567").
/// Non-finite input renders as zero; missing amounts never leak into the UI.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let negative = amount < 0.0;
    let total_paise = (amount.abs() * 100.0).round() as u64;
    let grouped = group_indian(total_paise / 100);
    let sign = if negative { "-" } else { "" };
    format!("{}₹{}.{:02}", sign, grouped, total_paise % 100)
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Render a wire date (`YYYY-MM-DD`, optionally with a time suffix) as
/// "15 Mar 2024". Unparseable input falls back to the raw string.
pub fn format_date(date: &str) -> String {
    let day_part = date.split('T').next().unwrap_or(date);
    match NaiveDate::parse_from_str(day_part, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d %b %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_have_no_grouping() {
        assert_eq!(format_currency(500.0), "₹500.00");
        assert_eq!(format_currency(0.0), "₹0.00");
    }

    #[test]
    fn grouping_follows_en_in_convention() {
        assert_eq!(format_currency(1000.0), "₹1,000.00");
        assert_eq!(format_currency(100000.0), "₹1,00,000.00");
        assert_eq!(format_currency(1234567.0), "₹12,34,567.00");
    }

    #[test]
    fn fractions_round_to_paise() {
        assert_eq!(format_currency(99.994), "₹99.99");
        assert_eq!(format_currency(12.5), "₹12.50");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_currency(-1500.0), "-₹1,500.00");
    }

    #[test]
    fn non_finite_amounts_render_as_zero() {
        assert_eq!(format_currency(f64::NAN), "₹0.00");
        assert_eq!(format_currency(f64::INFINITY), "₹0.00");
    }

    #[test]
    fn dates_render_human_readable() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T10:30:00Z"), "15 Mar 2024");
    }

    #[test]
    fn unparseable_dates_fall_back_to_raw() {
        assert_eq!(format_date("soon"), "soon");
    }
}
