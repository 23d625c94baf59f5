//! Locale text normalization
//!
//! Listing pages on divar.ir render numbers with Persian digits and decorate
//! values with unit and currency words. These helpers reduce such text to
//! plain ASCII tokens. Both functions are total: they accept any input,
//! including the empty string, and never fail.

/// Transliterates Persian digits to their ASCII equivalents
///
/// Each of the ten Persian digits maps to the corresponding ASCII digit;
/// every other character passes through unchanged. Applying the function
/// twice is equivalent to applying it once.
pub fn digits_to_ascii(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '۰' => '0',
            '۱' => '1',
            '۲' => '2',
            '۳' => '3',
            '۴' => '4',
            '۵' => '5',
            '۶' => '6',
            '۷' => '7',
            '۸' => '8',
            '۹' => '9',
            other => other,
        })
        .collect()
}

/// Strips everything but ASCII letters and digits
///
/// Retains `[A-Za-z0-9]` in their original order and discards all other
/// characters, including Persian letters, whitespace, punctuation, and
/// digit-group separators. Used on year, consumption, and price values
/// where only the bare token is wanted; descriptions keep their full text
/// and go through [`digits_to_ascii`] alone.
pub fn strip_to_alphanumeric(input: &str) -> String {
    input.chars().filter(char::is_ascii_alphanumeric).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_table() {
        assert_eq!(digits_to_ascii("۰۱۲۳۴۵۶۷۸۹"), "0123456789");
    }

    #[test]
    fn test_digits_pass_through_other_text() {
        assert_eq!(digits_to_ascii("مدل ۱۳۹۵"), "مدل 1395");
        assert_eq!(digits_to_ascii("abc 123"), "abc 123");
    }

    #[test]
    fn test_digits_empty_input() {
        assert_eq!(digits_to_ascii(""), "");
    }

    #[test]
    fn test_digits_idempotent() {
        let inputs = ["۱۲۳۴۵۶ تومان", "۱۳۹۵", "no digits", ""];
        for input in inputs {
            let once = digits_to_ascii(input);
            assert_eq!(digits_to_ascii(&once), once);
        }
    }

    #[test]
    fn test_strip_keeps_only_ascii_alphanumeric() {
        assert_eq!(strip_to_alphanumeric("۱۲۳ تومان"), "");
        assert_eq!(strip_to_alphanumeric("120,000 km"), "120000km");
        assert_eq!(strip_to_alphanumeric("abc-DEF_123"), "abcDEF123");
    }

    #[test]
    fn test_strip_output_is_alphanumeric_subsequence() {
        let inputs = ["۱۳۹۵", "  1395  ", "a!b@c#1$2%3", "تومان", ""];
        for input in inputs {
            let out = strip_to_alphanumeric(input);
            assert!(out.chars().all(|c| c.is_ascii_alphanumeric()));

            // Order of retained characters is preserved
            let mut rest = input.chars();
            assert!(out.chars().all(|c| rest.any(|i| i == c)));
        }
    }

    #[test]
    fn test_strip_empty_when_nothing_alphanumeric() {
        assert_eq!(strip_to_alphanumeric("؟! ـ،"), "");
        assert_eq!(strip_to_alphanumeric(""), "");
    }

    #[test]
    fn test_transliterate_then_strip() {
        assert_eq!(
            strip_to_alphanumeric(&digits_to_ascii("۱۲۳۴۵۶ تومان")),
            "123456"
        );
    }
}
