//! Number rendering for user-facing text.
//!
//! Values are shown the way a browser shows them: fixed-point output rounds exact ties away
//! from zero, and non-finite values read `Infinity`, `-Infinity` or `NaN`.

/// Enough fractional digits to print any `f64` exactly; the smallest subnormal needs 1074.
const EXACT_DIGITS: usize = 1100;

/// Fixed-point rendering with `digits` fractional digits.
///
/// Rounding works on the exact decimal expansion of the double, so `0.25` becomes `"0.3"` while
/// `1.005` (stored just below the tie) becomes `"1.00"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let digits = digits.min(EXACT_DIGITS);
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(digits))
        .collect();
    let round_up = fraction
        .as_bytes()
        .get(digits)
        .is_some_and(|digit| *digit >= b'5');

    if round_up && carry(&mut kept) {
        kept.insert(0, b'1');
    }

    let split = kept.len() - digits;
    let mut rendered = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        rendered.push('-');
    }
    rendered.extend(kept[..split].iter().map(|digit| char::from(*digit)));
    if digits > 0 {
        rendered.push('.');
        rendered.extend(kept[split..].iter().map(|digit| char::from(*digit)));
    }
    rendered
}

/// Shortest round-trip rendering, as interpolated into a sentence.
pub fn plain(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value > 0.0 {
        "Infinity".to_string()
    } else {
        "-Infinity".to_string()
    }
}

/// Adds one unit in the last place. Returns true when the carry runs off the front.
fn carry(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}
