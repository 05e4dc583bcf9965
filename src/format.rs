//! Token-based layout formatting and parsing.
//!
//! Layouts are scanned left to right with longest-token-first matching, so a
//! substituted month name can never be re-interpreted as a later token (the
//! `d` in "Mordad" stays a letter). Supported tokens:
//!
//! - `yyyy`: 4-digit year (e.g. 1404)
//! - `yy`: 2-digit year (e.g. 04)
//! - `MMMM`: Persian month name (e.g. آبان)
//! - `MMM`: English month name (e.g. Aban)
//! - `MM` / `M`: month with / without leading zero
//! - `dd` / `d`: day with / without leading zero
//!
//! Any other character is a literal.

use std::str::FromStr;

use crate::locale::{
    month_from_english_name, month_name_english, month_name_persian, to_latin_digits,
    to_persian_digits,
};
use crate::{DateError, JalaliDate};

/// ISO-like format: `yyyy-MM-dd`
pub const LAYOUT_ISO: &str = "yyyy-MM-dd";

/// Slash-separated format: `yyyy/MM/dd`
pub const LAYOUT_SLASH: &str = "yyyy/MM/dd";

/// Dot-separated format: `yyyy.MM.dd`
pub const LAYOUT_DOT: &str = "yyyy.MM.dd";

/// Long format with Persian month name: `dd MMMM yyyy`
pub const LAYOUT_LONG: &str = "dd MMMM yyyy";

/// Long format with English month name: `dd MMM yyyy`
pub const LAYOUT_LONG_ENGLISH: &str = "dd MMM yyyy";

/// Short format: `yy/MM/dd`
pub const LAYOUT_SHORT: &str = "yy/MM/dd";

/// Two-digit years are interpreted as this century.
const SHORT_YEAR_BASE: i32 = 1300;

/// Errors from layout-driven parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input does not match the layout.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// No month name matched at this position.
    #[error("Unknown month name: {0}")]
    UnknownMonthName(String),

    /// The parsed components do not form a valid date.
    #[error(transparent)]
    InvalidDate(#[from] DateError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    YearFull,
    YearShort,
    MonthNamePersian,
    MonthNameEnglish,
    MonthPadded,
    Month,
    DayPadded,
    Day,
    Literal(char),
}

/// Longest-token-first scan of the next layout element.
fn scan_token(layout: &str) -> Option<(Token, usize)> {
    const TOKENS: [(&str, Token); 8] = [
        ("yyyy", Token::YearFull),
        ("yy", Token::YearShort),
        ("MMMM", Token::MonthNamePersian),
        ("MMM", Token::MonthNameEnglish),
        ("MM", Token::MonthPadded),
        ("M", Token::Month),
        ("dd", Token::DayPadded),
        ("d", Token::Day),
    ];

    for (pattern, token) in TOKENS {
        if layout.starts_with(pattern) {
            return Some((token, pattern.len()));
        }
    }
    let c = layout.chars().next()?;
    Some((Token::Literal(c), c.len_utf8()))
}

impl JalaliDate {
    /// Formats the date according to `layout`.
    pub fn format(&self, layout: &str) -> String {
        let mut out = String::with_capacity(layout.len() + 8);
        let mut rest = layout;

        while let Some((token, len)) = scan_token(rest) {
            match token {
                Token::YearFull => out.push_str(&format!("{:04}", self.year())),
                Token::YearShort => out.push_str(&format!("{:02}", self.year().rem_euclid(100))),
                Token::MonthNamePersian => {
                    out.push_str(month_name_persian(self.month()).unwrap_or_default());
                }
                Token::MonthNameEnglish => {
                    out.push_str(month_name_english(self.month()).unwrap_or_default());
                }
                Token::MonthPadded => out.push_str(&format!("{:02}", self.month())),
                Token::Month => out.push_str(&self.month().to_string()),
                Token::DayPadded => out.push_str(&format!("{:02}", self.day())),
                Token::Day => out.push_str(&self.day().to_string()),
                Token::Literal(c) => out.push(c),
            }
            rest = &rest[len..];
        }
        out
    }

    /// Formats the date according to `layout`, with Persian digit glyphs.
    pub fn format_persian(&self, layout: &str) -> String {
        to_persian_digits(&self.format(layout))
    }
}

/// Parses `value` against `layout` into a validated date.
///
/// Persian digits in the input are accepted and normalized first. English
/// month names match case-insensitively. Components absent from the layout
/// default to zero and fail validation.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` when the input does not match the
/// layout, `ParseError::UnknownMonthName` when no month name matches a
/// `MMMM`/`MMM` token, and `ParseError::InvalidDate` when the matched
/// components are not a valid Jalali date.
pub fn parse(layout: &str, value: &str) -> Result<JalaliDate, ParseError> {
    let value = to_latin_digits(value);

    let mut rest_layout = layout;
    let mut rest = value.as_str();
    let mut year = 0_i32;
    let mut month = 0_u8;
    let mut day = 0_u8;

    while let Some((token, len)) = scan_token(rest_layout) {
        rest_layout = &rest_layout[len..];
        match token {
            Token::YearFull => {
                let (digits, tail) = take_chars(rest, 4, "yyyy")?;
                year = parse_component(digits)?;
                rest = tail;
            }
            Token::YearShort => {
                let (digits, tail) = take_chars(rest, 2, "yy")?;
                let y: i32 = parse_component(digits)?;
                year = if y < 100 { SHORT_YEAR_BASE + y } else { y };
                rest = tail;
            }
            Token::MonthNamePersian => {
                let (m, tail) = match_persian_month(rest)?;
                month = m;
                rest = tail;
            }
            Token::MonthNameEnglish => {
                let (m, tail) = match_english_month(rest)?;
                month = m;
                rest = tail;
            }
            Token::MonthPadded => {
                let (digits, tail) = take_chars(rest, 2, "MM")?;
                month = parse_component(digits)?;
                rest = tail;
            }
            Token::Month => {
                let (digits, tail) = take_digits(rest, "M")?;
                month = parse_component(digits)?;
                rest = tail;
            }
            Token::DayPadded => {
                let (digits, tail) = take_chars(rest, 2, "dd")?;
                day = parse_component(digits)?;
                rest = tail;
            }
            Token::Day => {
                let (digits, tail) = take_digits(rest, "d")?;
                day = parse_component(digits)?;
                rest = tail;
            }
            Token::Literal(expected) => {
                let mut chars = rest.chars();
                match chars.next() {
                    Some(c) if c == expected => rest = chars.as_str(),
                    Some(c) => {
                        return Err(ParseError::InvalidFormat(format!(
                            "expected '{expected}' but got '{c}'"
                        )));
                    }
                    None => {
                        return Err(ParseError::InvalidFormat(format!(
                            "expected '{expected}' but input ended"
                        )));
                    }
                }
            }
        }
    }

    if !rest.is_empty() {
        return Err(ParseError::InvalidFormat(format!(
            "unexpected trailing input: {rest}"
        )));
    }

    Ok(JalaliDate::new(year, month, day)?)
}

/// Takes exactly `n` characters from the front of `s`.
fn take_chars<'a>(s: &'a str, n: usize, token: &str) -> Result<(&'a str, &'a str), ParseError> {
    if s.chars().count() < n {
        return Err(ParseError::InvalidFormat(format!(
            "insufficient characters for token {token}"
        )));
    }
    let end = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    Ok(s.split_at(end))
}

/// Takes one or two leading ASCII digits from `s`.
fn take_digits<'a>(s: &'a str, token: &str) -> Result<(&'a str, &'a str), ParseError> {
    let end = s
        .bytes()
        .take(2)
        .take_while(u8::is_ascii_digit)
        .count();
    if end == 0 {
        return Err(ParseError::InvalidFormat(format!(
            "expected digit for token {token}"
        )));
    }
    Ok(s.split_at(end))
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn match_persian_month(s: &str) -> Result<(u8, &str), ParseError> {
    for m in 1..=12 {
        if let Some(name) = month_name_persian(m) {
            if let Some(tail) = s.strip_prefix(name) {
                return Ok((m, tail));
            }
        }
    }
    Err(ParseError::UnknownMonthName(head_of(s)))
}

fn match_english_month(s: &str) -> Result<(u8, &str), ParseError> {
    for m in 1..=12 {
        if let Some(name) = month_name_english(m) {
            let is_prefix = s
                .get(..name.len())
                .is_some_and(|p| p.eq_ignore_ascii_case(name));
            if is_prefix {
                if let Some(candidate) = month_from_english_name(name) {
                    return Ok((candidate, &s[name.len()..]));
                }
            }
        }
    }
    Err(ParseError::UnknownMonthName(head_of(s)))
}

/// First whitespace-delimited word of the unmatched input, for error messages.
fn head_of(s: &str) -> String {
    s.split_whitespace().next().unwrap_or(s).to_owned()
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = to_latin_digits(s.trim());

        for sep in ['-', '/', '.'] {
            if !normalized.contains(sep) {
                continue;
            }
            let parts: Vec<&str> = normalized.split(sep).collect();
            if parts.len() != 3 {
                continue;
            }
            let year: i32 = parse_component(parts[0])?;
            let month: u8 = parse_component(parts[1])?;
            let day: u8 = parse_component(parts[2])?;
            return Ok(Self::new(year, month, day)?);
        }

        Err(ParseError::InvalidFormat(format!(
            "unsupported date format: {s}"
        )))
    }
}
