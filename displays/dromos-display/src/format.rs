//! Fixed-width numeric formatting
//!
//! Telemetry readouts sit at fixed panel positions, so every value is
//! rendered at a constant width: clamped to what fits, right-aligned with
//! leading spaces, optionally carrying a sign character directly in front
//! of the digits.

use core::fmt::Write;

use heapless::String;

/// Widest supported readout in digits (covers the full `i16` range)
pub const MAX_DIGITS: usize = 5;

/// Capacity of a formatted readout: digits plus a sign character
pub const FORMATTED_LEN: usize = MAX_DIGITS + 1;

/// Format a number into a fixed-width string
///
/// The value is clamped to the largest magnitude that fits `max_digits`
/// digits (so a 3-digit cell shows 999 for anything above). With
/// `show_sign` the sign character sits directly before the first digit:
/// `+` for positive, `-` for negative, a space for zero, and the total
/// width grows by one.
///
/// `max_digits` itself is clamped to `1..=MAX_DIGITS`.
pub fn format_fixed(value: i16, max_digits: u8, show_sign: bool) -> String<FORMATTED_LEN> {
    let digits = (max_digits as usize).clamp(1, MAX_DIGITS);
    let limit = (10i32.pow(digits as u32) - 1).min(i16::MAX as i32) as i16;
    let clamped = value.clamp(-limit, limit);

    let mut body: String<FORMATTED_LEN> = String::new();
    if show_sign {
        let sign = match clamped {
            v if v > 0 => '+',
            v if v < 0 => '-',
            _ => ' ',
        };
        let _ = body.push(sign);
    }
    let _ = write!(body, "{}", clamped.unsigned_abs());

    let width = digits + usize::from(show_sign);
    let mut out: String<FORMATTED_LEN> = String::new();
    for _ in body.len()..width {
        let _ = out.push(' ');
    }
    let _ = out.push_str(&body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_width() {
        assert_eq!(format_fixed(0, 3, false), "  0");
        assert_eq!(format_fixed(42, 4, false), "  42");
        assert_eq!(format_fixed(32_767, 5, false), "32767");
    }

    #[test]
    fn sign_sits_before_the_digits() {
        assert_eq!(format_fixed(5, 3, true), "  +5");
        assert_eq!(format_fixed(-42, 3, true), " -42");
        assert_eq!(format_fixed(0, 3, true), "   0");
    }

    #[test]
    fn clamps_to_cell_capacity() {
        assert_eq!(format_fixed(1_234, 3, false), "999");
        assert_eq!(format_fixed(-1_234, 3, true), "-999");
    }

    #[test]
    fn digit_count_is_bounded() {
        assert_eq!(format_fixed(7, 0, false), "7");
        assert_eq!(format_fixed(7, 200, false), "    7");
    }

    #[test]
    fn extremes_survive() {
        assert_eq!(format_fixed(i16::MIN, 5, true), "-32767");
        assert_eq!(format_fixed(i16::MAX, 5, true), "+32767");
    }
}
