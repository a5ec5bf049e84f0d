use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    #[error("malformed duration token `{0}`")]
    Malformed(String),
}

/// Parse a `PT[#H][#M]` duration token into total minutes.
///
/// Hours and minutes are each optional, but at least one must be present:
/// `PT9H20M` -> 560, `PT2H` -> 120, `PT45M` -> 45.
pub fn parse_minutes(token: &str) -> Result<u32, DurationError> {
    let (hours, minutes) = parse_components(token)?;
    Ok(hours.unwrap_or(0) * 60 + minutes.unwrap_or(0))
}

/// Render a `PT[#H][#M]` token as a display string: `"9h 20m"`, `"2h"`, `"45m"`.
pub fn format_display(token: &str) -> Result<String, DurationError> {
    match parse_components(token)? {
        (Some(h), Some(m)) => Ok(format!("{h}h {m}m")),
        (Some(h), None) => Ok(format!("{h}h")),
        (None, Some(m)) => Ok(format!("{m}m")),
        // parse_components rejects tokens with neither component
        (None, None) => Err(DurationError::Malformed(token.to_string())),
    }
}

fn parse_components(token: &str) -> Result<(Option<u32>, Option<u32>), DurationError> {
    let malformed = || DurationError::Malformed(token.to_string());

    let body = token.strip_prefix("PT").ok_or_else(malformed)?;

    let (hours_digits, rest) = match body.split_once('H') {
        Some((digits, rest)) => (Some(digits), rest),
        None => (None, body),
    };

    let minutes_digits = match rest.split_once('M') {
        Some((digits, "")) => Some(digits),
        // trailing text after the minute marker
        Some(_) => return Err(malformed()),
        None if rest.is_empty() => None,
        // leftover text with no minute marker
        None => return Err(malformed()),
    };

    if hours_digits.is_none() && minutes_digits.is_none() {
        return Err(malformed());
    }

    let hours = hours_digits
        .map(|d| d.parse::<u32>().map_err(|_| malformed()))
        .transpose()?;
    let minutes = minutes_digits
        .map(|d| d.parse::<u32>().map_err(|_| malformed()))
        .transpose()?;

    Ok((hours, minutes))
}
