//! Locale-aware number, date, and plural formatting
//!
//! Every operation here degrades to a plain-text fallback instead of
//! returning an error; formatting feeds directly into rendered UI where a
//! blank or missing field is worse than an unstyled one.

use crate::locale::Locale;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde_json::Value;

/// Sentinel returned for unparseable date input
pub const INVALID_DATE: &str = "Invalid Date";

/// Options for [`format_number`]
#[derive(Debug, Clone)]
pub struct NumberOptions {
    /// Fixed number of fraction digits; `None` keeps the value's natural form
    pub decimals: Option<u32>,
    /// Whether to insert grouping separators in the integer part
    pub grouping: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            decimals: None,
            grouping: true,
        }
    }
}

/// Format a number per locale convention.
///
/// Non-finite values fall back to their plain display form, so the result
/// is always non-empty.
pub fn format_number(value: f64, locale: Locale, options: Option<&NumberOptions>) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let defaults = NumberOptions::default();
    let options = options.unwrap_or(&defaults);

    let magnitude = value.abs();
    let rendered = match options.decimals {
        Some(decimals) => format!("{:.*}", decimals as usize, magnitude),
        None => magnitude.to_string(),
    };

    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (rendered, None),
    };

    let int_part = if options.grouping {
        group_digits(&int_part, grouping_separator(locale))
    } else {
        int_part
    };

    let mut output = String::new();
    if value < 0.0 {
        output.push('-');
    }
    output.push_str(&int_part);
    if let Some(frac) = frac_part {
        output.push(decimal_separator(locale));
        output.push_str(&frac);
    }
    output
}

fn decimal_separator(locale: Locale) -> char {
    match locale {
        Locale::Portuguese => ',',
        Locale::English => '.',
    }
}

fn grouping_separator(locale: Locale) -> char {
    match locale {
        Locale::Portuguese => '.',
        Locale::English => ',',
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Date rendering styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// Numeric, e.g. `09/08/2026`
    Short,
    /// Abbreviated month name
    Medium,
    /// Full month name
    Long,
}

const PT_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const PT_MONTHS_SHORT: [&str; 12] = [
    "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.", "nov.", "dez.",
];

const EN_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a date per locale convention.
pub fn format_date(date: &DateTime<Utc>, locale: Locale, style: DateStyle) -> String {
    match (locale, style) {
        (Locale::Portuguese, DateStyle::Short) => date.format("%d/%m/%Y").to_string(),
        (Locale::English, DateStyle::Short) => date.format("%m/%d/%Y").to_string(),
        (locale, style) => {
            let month_idx = date.month0() as usize;
            let month = match (locale, style) {
                (Locale::Portuguese, DateStyle::Long) => PT_MONTHS.get(month_idx),
                (Locale::Portuguese, _) => PT_MONTHS_SHORT.get(month_idx),
                (Locale::English, DateStyle::Long) => EN_MONTHS.get(month_idx),
                (Locale::English, _) => EN_MONTHS_SHORT.get(month_idx),
            };
            match (locale, month) {
                (Locale::Portuguese, Some(month)) => {
                    format!("{} de {} de {}", date.day(), month, date.year())
                }
                (Locale::English, Some(month)) => {
                    format!("{} {}, {}", month, date.day(), date.year())
                }
                // Out-of-range month cannot happen for a valid chrono date,
                // but the fallback keeps this total.
                (_, None) => date.format("%Y-%m-%d").to_string(),
            }
        }
    }
}

/// Parse a raw date string (RFC 3339 or `YYYY-MM-DD`) and format it.
///
/// Returns [`INVALID_DATE`] when the input does not parse.
pub fn parse_and_format_date(raw: &str, locale: Locale, style: DateStyle) -> String {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        });

    match parsed {
        Some(date) => format_date(&date, locale, style),
        None => INVALID_DATE.to_string(),
    }
}

/// Plural categories recognized by the supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralCategory {
    Zero,
    One,
    Other,
}

impl PluralCategory {
    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Other => "other",
        }
    }
}

/// Get the plural category for a count in the given locale
pub fn plural_category(locale: Locale, count: u64) -> PluralCategory {
    match locale {
        Locale::Portuguese => portuguese_plural_form(count),
        Locale::English => english_plural_form(count),
    }
}

fn portuguese_plural_form(count: u64) -> PluralCategory {
    match count {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        _ => PluralCategory::Other,
    }
}

fn english_plural_form(count: u64) -> PluralCategory {
    match count {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        _ => PluralCategory::Other,
    }
}

/// Per-category text forms for a pluralized message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralForms {
    pub zero: Option<String>,
    pub one: Option<String>,
    pub other: Option<String>,
}

impl PluralForms {
    /// Create an empty set of forms
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `zero` form
    pub fn zero(mut self, text: impl Into<String>) -> Self {
        self.zero = Some(text.into());
        self
    }

    /// Set the `one` form
    pub fn one(mut self, text: impl Into<String>) -> Self {
        self.one = Some(text.into());
        self
    }

    /// Set the `other` form
    pub fn other(mut self, text: impl Into<String>) -> Self {
        self.other = Some(text.into());
        self
    }

    /// Read forms from a bundle sub-record like
    /// `{"zero": "...", "one": "...", "other": "..."}`.
    ///
    /// Non-object values and non-string fields yield empty forms.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            zero: field("zero"),
            one: field("one"),
            other: field("other"),
        }
    }

    /// Select the text for a category, falling back to `other`
    pub fn select(&self, category: PluralCategory) -> Option<&str> {
        let exact = match category {
            PluralCategory::Zero => self.zero.as_deref(),
            PluralCategory::One => self.one.as_deref(),
            PluralCategory::Other => self.other.as_deref(),
        };
        exact.or(self.other.as_deref())
    }
}

/// Format a pluralized message for a count.
///
/// When `include_count` is set, the locale-formatted count prefixes the
/// chosen text with a single space; otherwise the count never appears in the
/// output. Missing categories fall back to `other`, then to the empty
/// string.
pub fn format_plural(
    count: u64,
    locale: Locale,
    forms: &PluralForms,
    include_count: bool,
) -> String {
    let text = forms.select(plural_category(locale, count)).unwrap_or("");
    if !include_count {
        return text.to_string();
    }
    let formatted_count = format_number(count as f64, locale, None);
    if text.is_empty() {
        formatted_count
    } else {
        format!("{formatted_count} {text}")
    }
}
