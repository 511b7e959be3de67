/// Parse a user-entered integer the forgiving way.
///
/// Leading whitespace and an optional sign are accepted, then as many
/// digits as follow; anything after the digits is ignored. Input with no
/// leading digits yields 0 instead of an error. Out-of-range values
/// saturate.
pub fn lenient_int(input: &str) -> i32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = match rest.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &rest[..end],
        None => rest,
    };
    if digits.is_empty() {
        return 0;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        (acc * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1)
    });
    let value = if negative { -magnitude } else { magnitude };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
