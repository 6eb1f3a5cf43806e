//! Lenient numeric coercion for quantity columns.

/// Parse the longest leading decimal integer of `s`, falling back to `0`.
///
/// Leading whitespace is skipped and one optional `+` or `-` sign is
/// accepted. Parsing stops at the first non-digit, so `"12 boxes"` yields
/// `12`. Text with no leading digits (including the empty string) yields
/// `0` instead of an error. Values beyond the `i64` range saturate.
///
/// # Examples
///
/// ```
/// use gudid_core::coercion::parse_leading_integer;
///
/// assert_eq!(parse_leading_integer("42"), 42);
/// assert_eq!(parse_leading_integer("  -7pcs"), -7);
/// assert_eq!(parse_leading_integer("abc"), 0);
/// assert_eq!(parse_leading_integer(""), 0);
/// ```
pub fn parse_leading_integer(s: &str) -> i64 {
    let trimmed = s.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}
