//! Locale-independent integer parsing with C-style base prefixes

/// Parse a 32-bit signed integer with base detection.
///
/// Leading whitespace and a sign are accepted. `0x`/`0X` followed by a hex
/// digit selects base 16, any other leading `0` base 8, otherwise base 10.
/// Only whitespace may follow the digits. Returns `None` if there are no
/// digits, trailing garbage, or a value outside `i32`.
pub fn parse_int32(text: &str) -> Option<i32> {
    let bytes = text.as_bytes();
    let mut pos = skip_space(bytes, 0);

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let (radix, start) = detect_radix(bytes, pos);
    let mut magnitude: i64 = 0;
    pos = start;
    while let Some(digit) = bytes
        .get(pos)
        .and_then(|&b| char::from(b).to_digit(radix))
    {
        magnitude = magnitude
            .checked_mul(i64::from(radix))?
            .checked_add(i64::from(digit))?;
        pos += 1;
    }
    if pos == start {
        return None;
    }
    if skip_space(bytes, pos) != bytes.len() {
        return None;
    }

    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}

fn detect_radix(bytes: &[u8], pos: usize) -> (u32, usize) {
    match (bytes.get(pos), bytes.get(pos + 1), bytes.get(pos + 2)) {
        (Some(b'0'), Some(b'x' | b'X'), Some(b)) if b.is_ascii_hexdigit() => (16, pos + 2),
        (Some(b'0'), _, _) => (8, pos),
        _ => (10, pos),
    }
}

// C isspace in the "C" locale
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn skip_space(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).copied().is_some_and(is_space) {
        pos += 1;
    }
    pos
}
