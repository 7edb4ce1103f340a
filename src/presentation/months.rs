/// Years offered by the year picker.
pub const YEARS: [&str; 3] = ["2023", "2024", "2025"];

/// Month picker entries, keyed and ordered by two-digit month.
pub const MONTHS: [(&str, &str); 12] = [
    ("01", "January"),
    ("02", "February"),
    ("03", "March"),
    ("04", "April"),
    ("05", "May"),
    ("06", "June"),
    ("07", "July"),
    ("08", "August"),
    ("09", "September"),
    ("10", "October"),
    ("11", "November"),
    ("12", "December"),
];

pub fn month_name(key: &str) -> Option<&'static str> {
    MONTHS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

/// Accepts `"03"`, `"3"`, `"March"` or `"mar"` and returns the picker key.
pub fn parse_month(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if input.bytes().all(|b| b.is_ascii_digit()) {
        let number: usize = input.parse().ok()?;
        return MONTHS.get(number.checked_sub(1)?).map(|(key, _)| *key);
    }

    let lower = input.to_ascii_lowercase();
    MONTHS
        .iter()
        .find(|(_, name)| {
            let name = name.to_ascii_lowercase();
            name == lower || (lower.len() >= 3 && name.starts_with(&lower))
        })
        .map(|(key, _)| *key)
}
