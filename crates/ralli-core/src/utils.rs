//! Derivation rules shared by the admin console

use crate::types::StatType;

/// Width of sport and line codes
pub const CODE_WIDTH: usize = 5;

/// Zero-pad a code number to [`CODE_WIDTH`] digits
#[must_use]
pub fn pad_code(value: u32) -> String {
    format!("{value:0>width$}", width = CODE_WIDTH)
}

/// Next line code for a sport
///
/// One more than the highest line code among stat types with `sport_code`,
/// or `00001` when the sport has none. Line codes that do not parse as
/// numbers are ignored.
#[must_use]
pub fn next_line_code(stat_types: &[StatType], sport_code: &str) -> String {
    let max = stat_types
        .iter()
        .filter(|stat| stat.sport_code == sport_code)
        .filter_map(|stat| stat.line_code.parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    pad_code(max.saturating_add(1))
}

/// Compose the `<sport_code>-<line_code>` numeric id of a stat type
#[must_use]
pub fn compose_num_id(sport_code: &str, line_code: &str) -> String {
    format!("{sport_code}-{line_code}")
}

/// Id for the next record appended to a collection of `len` records
#[must_use]
pub fn next_record_id(len: usize) -> String {
    len.saturating_add(1).to_string()
}

/// Uppercase initials of every whitespace-separated word of `name`
#[must_use]
pub fn avatar_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Case-insensitive substring match, an empty needle matches everything
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Parse a submitted line threshold
#[must_use]
pub fn parse_line_value(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
