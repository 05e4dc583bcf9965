//! Month names and digit glyphs for the two supported locales.
//!
//! Static read-only tables; lookups never allocate except for the string
//! substitution helpers.

/// A Jalali month name in both supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthName {
    /// Native Persian spelling
    pub persian: &'static str,
    /// English transliteration
    pub english: &'static str,
}

/// Month names indexed by month number minus one.
pub const MONTH_NAMES: [MonthName; 12] = [
    MonthName { persian: "فروردین", english: "Farvardin" },
    MonthName { persian: "اردیبهشت", english: "Ordibehesht" },
    MonthName { persian: "خرداد", english: "Khordad" },
    MonthName { persian: "تیر", english: "Tir" },
    MonthName { persian: "مرداد", english: "Mordad" },
    MonthName { persian: "شهریور", english: "Shahrivar" },
    MonthName { persian: "مهر", english: "Mehr" },
    MonthName { persian: "آبان", english: "Aban" },
    MonthName { persian: "آذر", english: "Azar" },
    MonthName { persian: "دی", english: "Dey" },
    MonthName { persian: "بهمن", english: "Bahman" },
    MonthName { persian: "اسفند", english: "Esfand" },
];

/// Persian digit glyphs indexed by digit value.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Returns the Persian name of a month, or `None` outside `1..=12`.
pub fn month_name_persian(month: u8) -> Option<&'static str> {
    month_entry(month).map(|n| n.persian)
}

/// Returns the English transliteration of a month name, or `None` outside `1..=12`.
pub fn month_name_english(month: u8) -> Option<&'static str> {
    month_entry(month).map(|n| n.english)
}

/// Returns the month number (1-12) for a Persian month name.
pub fn month_from_persian_name(name: &str) -> Option<u8> {
    MONTH_NAMES
        .iter()
        .position(|n| n.persian == name)
        .map(to_month_number)
}

/// Returns the month number (1-12) for an English month name, case-insensitively.
pub fn month_from_english_name(name: &str) -> Option<u8> {
    MONTH_NAMES
        .iter()
        .position(|n| n.english.eq_ignore_ascii_case(name))
        .map(to_month_number)
}

fn month_entry(month: u8) -> Option<&'static MonthName> {
    if (1..=12).contains(&month) {
        MONTH_NAMES.get(usize::from(month) - 1)
    } else {
        None
    }
}

#[allow(clippy::cast_possible_truncation)]
fn to_month_number(index: usize) -> u8 {
    index as u8 + 1
}

/// Replaces ASCII digits with Persian digit glyphs; other characters pass through.
pub fn to_persian_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Replaces Persian digit glyphs with ASCII digits; other characters pass through.
pub fn to_latin_digits(s: &str) -> String {
    s.chars()
        .map(|c| match PERSIAN_DIGITS.iter().position(|&p| p == c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookups() {
        assert_eq!(month_name_english(1), Some("Farvardin"));
        assert_eq!(month_name_english(8), Some("Aban"));
        assert_eq!(month_name_english(12), Some("Esfand"));
        assert_eq!(month_name_persian(1), Some("فروردین"));
        assert_eq!(month_name_persian(12), Some("اسفند"));
        assert_eq!(month_name_english(0), None);
        assert_eq!(month_name_english(13), None);
    }

    #[test]
    fn reverse_lookups() {
        for m in 1..=12_u8 {
            let persian = month_name_persian(m).unwrap();
            let english = month_name_english(m).unwrap();
            assert_eq!(month_from_persian_name(persian), Some(m));
            assert_eq!(month_from_english_name(english), Some(m));
        }
        assert_eq!(month_from_english_name("aban"), Some(8));
        assert_eq!(month_from_english_name("ESFAND"), Some(12));
        assert_eq!(month_from_english_name("Januar"), None);
        assert_eq!(month_from_persian_name("Aban"), None);
    }

    #[test]
    fn digit_substitution() {
        assert_eq!(to_persian_digits("1404-08-04"), "۱۴۰۴-۰۸-۰۴");
        assert_eq!(to_latin_digits("۱۴۰۴/۰۸/۰۴"), "1404/08/04");
        // non-digits untouched, both directions
        assert_eq!(to_persian_digits("4 Aban 1404"), "۴ Aban ۱۴۰۴");
        assert_eq!(to_latin_digits("no digits"), "no digits");
    }

    #[test]
    fn digit_substitution_round_trip() {
        let s = "1404-08-04 and 219 days";
        assert_eq!(to_latin_digits(&to_persian_digits(s)), s);
    }
}
