//! Display formatting for prices and dates.

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Rupiah with `.` as thousands separator: `Rp 23.500`.
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {}", grouped)
}

/// `2026-10-16` (optionally followed by a time) as `16 Oct 2026`.
/// Anything unparseable is returned unchanged.
pub fn format_date(value: &str) -> String {
    let date = value.get(..10).unwrap_or(value);
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return value.to_string();
    };
    let month = month.parse::<usize>().ok().filter(|m| (1..=12).contains(m));
    let day = day.parse::<u32>().ok();
    match (month, day) {
        (Some(month), Some(day)) if year.len() == 4 => {
            format!("{} {} {}", day, MONTHS[month - 1], year)
        }
        _ => value.to_string(),
    }
}

/// `16 Oct 2026 - 31 Dec 2026`
pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_date(start), format_date(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(0), "Rp 0");
        assert_eq!(format_price(950), "Rp 950");
        assert_eq!(format_price(23500), "Rp 23.500");
        assert_eq!(format_price(70500), "Rp 70.500");
        assert_eq!(format_price(12_500_000), "Rp 12.500.000");
    }

    #[test]
    fn dates() {
        assert_eq!(format_date("2026-01-05"), "5 Jan 2026");
        assert_eq!(format_date("2026-10-16T08:00:00Z"), "16 Oct 2026");
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date("2026-13-01"), "2026-13-01");
    }
}
