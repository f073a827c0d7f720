use thiserror::Error;

/// Amounts are stored as signed integer hundredths so that sums stay exact.
/// "12.50" -> 1250, "-3.4" -> -340.
pub type Cents = i64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("not a decimal number: '{input}'")]
pub struct ParseAmountError {
    pub input: String,
}

/// Parse decimal text into cents. Accepts an optional leading sign and an
/// optional fraction; fraction digits past the second are truncated.
pub fn parse_amount(input: &str) -> Result<Cents, ParseAmountError> {
    let err = || ParseAmountError {
        input: input.to_string(),
    };

    let trimmed = input.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let (units_str, frac_str) = match unsigned.split_once('.') {
        Some((units, frac)) => (units, frac),
        None => (unsigned, ""),
    };

    if units_str.is_empty() && frac_str.is_empty() {
        return Err(err());
    }
    if !units_str.chars().all(|c| c.is_ascii_digit())
        || !frac_str.chars().all(|c| c.is_ascii_digit())
    {
        return Err(err());
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| err())?
    };

    let frac = &frac_str[..frac_str.len().min(2)];
    let mut cents_part: i64 = if frac.is_empty() {
        0
    } else {
        frac.parse().map_err(|_| err())?
    };
    if frac.len() == 1 {
        cents_part *= 10;
    }

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents_part))
        .ok_or_else(err)?;
    Ok(if negative { -cents } else { cents })
}

/// Format cents as decimal text. Example: 1250 -> "12.50", -40 -> "-0.40"
pub fn format_amount(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let units = (cents / 100).abs();
    let frac = (cents % 100).abs();
    format!("{sign}{units}.{frac:02}")
}
