//! Number formatting and lenient numeric parsing.

use serde_json::Value;

use crate::text::capitalize;

/// English words for the numbers a person would normally spell out.
static SMALL_NUMBERS: [&str; 21] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
    "twenty",
];

/// Zero-pad `value` to at least `digits` characters.
///
/// # Examples
///
/// ```rust
/// use sundry::number::leading_zeros;
///
/// assert_eq!(leading_zeros(2, 0), "2");
/// assert_eq!(leading_zeros(2, 2), "02");
/// assert_eq!(leading_zeros(99, 2), "99");
/// ```
#[must_use]
pub fn leading_zeros(value: u32, digits: usize) -> String {
    format!("{value:0width$}", width = digits)
}

/// Spell out `value` in English when it is small enough to say naturally.
///
/// Numbers from zero through twenty become words ("Three", "Twenty");
/// everything else, including negatives, renders as decimal digits.
/// `capitalized` selects "Three" versus "three".
///
/// # Examples
///
/// ```rust
/// use sundry::number::say_number;
///
/// assert_eq!(say_number(3, true), "Three");
/// assert_eq!(say_number(4, false), "four");
/// assert_eq!(say_number(-14, true), "-14");
/// assert_eq!(say_number(21, true), "21");
/// ```
#[must_use]
pub fn say_number(value: i64, capitalized: bool) -> String {
    let word = usize::try_from(value)
        .ok()
        .and_then(|index| SMALL_NUMBERS.get(index));
    match word {
        Some(word) if capitalized => capitalize(word),
        Some(word) => (*word).to_owned(),
        None => value.to_string(),
    }
}

/// Extract a number from mixed text.
///
/// Keeps digits, decimal points, and minus signs, then parses what is left;
/// `None` when nothing numeric remains or the residue is not a valid number.
///
/// # Examples
///
/// ```rust
/// use sundry::number::parse_number;
///
/// assert_eq!(parse_number("hey 34"), Some(34.0));
/// assert_eq!(parse_number("wow 28.9"), Some(28.9));
/// assert_eq!(parse_number("nothing"), None);
/// ```
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let numeric: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    numeric.parse().ok()
}

/// Convert `text` to a JSON number when the whole string is numeric,
/// otherwise keep it as a JSON string.
///
/// Integers stay integral; anything fractional becomes a float.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use sundry::number::maybe_number;
///
/// assert_eq!(maybe_number("3.5"), json!(3.5));
/// assert_eq!(maybe_number("563"), json!(563));
/// assert_eq!(maybe_number("asdfds"), json!("asdfds"));
/// ```
#[must_use]
pub fn maybe_number(text: &str) -> Value {
    if let Ok(integer) = text.parse::<i64>() {
        return Value::Number(integer.into());
    }
    text.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map_or_else(|| Value::String(text.to_owned()), Value::Number)
}

#[cfg(test)]
mod tests {
    use super::{parse_number, say_number};

    #[test]
    fn says_twenty_but_not_twenty_one() {
        assert_eq!(say_number(20, true), "Twenty");
        assert_eq!(say_number(21, true), "21");
    }

    #[test]
    fn parse_number_rejects_scattered_signs() {
        // A stray trailing minus leaves an unparseable residue.
        assert_eq!(parse_number("12-"), None);
    }
}
