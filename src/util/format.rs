//! Display formatting for prices and counted labels.

/// Formats an integer cent amount as a US-dollar price string, grouping
/// the dollar part in thousands: `format_price(123456)` is `"$1,234.56"`.
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let dollars = magnitude / 100;
    let remainder = magnitude % 100;
    format!("{sign}${}.{remainder:02}", group_thousands(dollars))
}

/// Returns `"{count} {noun}"`, with the noun left singular only when the
/// count is exactly one.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
