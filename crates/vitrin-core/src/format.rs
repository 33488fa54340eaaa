//! # Input Formatting
//!
//! Display formatters for the payment form and the order summary.
//!
//! All functions here are pure, idempotent on already-formatted input,
//! and total: any text a customer can type mid-entry (letters, symbols,
//! partial numbers, empty string) produces a best-effort result, never
//! an error. The UI calls them on every keystroke.
//!
//! Nothing formatted here is transmitted anywhere; card data display is
//! the only concern.

// =============================================================================
// Digit Filtering
// =============================================================================

/// Keeps only ASCII digits, dropping everything else.
///
/// Used directly for the CVC field and as the first step of the card
/// number and expiry formatters.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

// =============================================================================
// Card Number
// =============================================================================

/// Formats a card number into space-separated groups of 4 digits.
///
/// Strips all non-digit characters, keeps the first 16 digits and
/// regroups them. Input with fewer than 4 digits is returned unchanged
/// so partially typed text is never destroyed mid-entry.
///
/// ## Example
/// ```rust
/// use vitrin_core::format::format_card_number;
///
/// assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("4111-1111"), "4111 1111");
/// assert_eq!(format_card_number("41"), "41"); // too short, untouched
/// ```
pub fn format_card_number(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() < 4 {
        // No formattable run yet; leave the customer's input alone
        return raw.to_string();
    }

    let end = digits.len().min(16);
    let mut out = String::with_capacity(19);
    for (i, b) in digits.as_bytes()[..end].iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(*b as char);
    }
    out
}

// =============================================================================
// Expiry Date
// =============================================================================

/// Formats a card expiry into `MM/YY` form.
///
/// Strips non-digits; with 2 or more digits the result is the first two
/// digits, a slash, then digits 3-4 (truncated). With fewer the bare
/// digits are returned.
///
/// The month is NOT range-checked against 01-12 here: this is a
/// keystroke formatter, and calendar validation belongs to a separate
/// validation step at submit time.
///
/// ## Example
/// ```rust
/// use vitrin_core::format::format_expiry;
///
/// assert_eq!(format_expiry("1225"), "12/25");
/// assert_eq!(format_expiry("12/25"), "12/25"); // idempotent
/// assert_eq!(format_expiry("1"), "1");
/// assert_eq!(format_expiry(""), "");
/// ```
pub fn format_expiry(raw: &str) -> String {
    let digits = digits_only(raw);
    if digits.len() < 2 {
        return digits;
    }

    let end = digits.len().min(4);
    format!("{}/{}", &digits[..2], &digits[2..end])
}

// =============================================================================
// Variant Color Names
// =============================================================================

/// Resolves a variant color code (hex or keyword) to a display name.
///
/// Unknown codes fall back to the raw code so the summary always shows
/// something.
pub fn color_display_name(code: &str) -> String {
    fn lookup(code: &str) -> Option<&'static str> {
        Some(match code {
            "#ef4444" | "red" => "Red",
            "#3b82f6" | "blue" => "Blue",
            "#22c55e" | "green" => "Green",
            "#a855f7" | "purple" => "Purple",
            "#ffd700" | "gold" => "Gold",
            "#c0c0c0" | "silver" => "Silver",
            "#1e293b" => "Dark Slate",
            "#000000" | "black" => "Black",
            "#ffffff" | "white" => "White",
            "#94a3b8" | "gray" => "Gray",
            "#78350f" | "brown" => "Brown",
            "#ea580c" | "orange" => "Orange",
            "yellow" => "Yellow",
            _ => return None,
        })
    }

    lookup(code)
        .or_else(|| lookup(&code.to_ascii_lowercase()))
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("1a2b3"), "123");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only(""), "");
    }

    #[test]
    fn test_card_number_grouping() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("411111"), "4111 11");
        assert_eq!(format_card_number("4111"), "4111");
    }

    #[test]
    fn test_card_number_strips_noise() {
        assert_eq!(format_card_number("4111-1111-1111-1111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number(" 4111 1111 "), "4111 1111");
    }

    #[test]
    fn test_card_number_truncates_to_16_digits() {
        assert_eq!(
            format_card_number("41111111111111112222"),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_card_number_short_input_untouched() {
        // Fewer than 4 digits: partial input is preserved exactly
        assert_eq!(format_card_number("41"), "41");
        assert_eq!(format_card_number("4a1"), "4a1");
        assert_eq!(format_card_number(""), "");
        assert_eq!(format_card_number("abc"), "abc");
    }

    #[test]
    fn test_card_number_idempotent() {
        for input in ["4111111111111111", "41", "4111 1111 1", "garbage", ""] {
            let once = format_card_number(input);
            let twice = format_card_number(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_expiry_formatting() {
        assert_eq!(format_expiry("1225"), "12/25");
        assert_eq!(format_expiry("122"), "12/2");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry(""), "");
    }

    #[test]
    fn test_expiry_strips_noise_and_truncates() {
        assert_eq!(format_expiry("12/25"), "12/25");
        assert_eq!(format_expiry("12a25"), "12/25");
        assert_eq!(format_expiry("122534"), "12/25");
        assert_eq!(format_expiry("xy"), "");
    }

    #[test]
    fn test_expiry_not_calendar_validated() {
        // 99/99 passes through; range checking is a separate concern
        assert_eq!(format_expiry("9999"), "99/99");
    }

    #[test]
    fn test_expiry_idempotent() {
        for input in ["1225", "12/25", "1", "", "99/99"] {
            let once = format_expiry(input);
            let twice = format_expiry(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_color_display_name() {
        assert_eq!(color_display_name("#ef4444"), "Red");
        assert_eq!(color_display_name("red"), "Red");
        assert_eq!(color_display_name("RED"), "Red");
        assert_eq!(color_display_name("#1e293b"), "Dark Slate");
        // Unknown codes fall back to the raw value
        assert_eq!(color_display_name("#123456"), "#123456");
    }
}
