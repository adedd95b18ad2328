//! Numeric text coercion and money formatting.

/// Locales the money formatter knows about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    EsEs,
    EnUs,
}

/// Parses user input as a number, mapping anything unusable to `0`.
///
/// Accepts a single comma as decimal separator (`"12,5"`).
pub fn parse_or_zero(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Formats an amount in euros with two decimals.
///
/// es-ES only groups thousands from five integer digits upward, so `1500`
/// renders as `1500,00 €` while `12345` renders as `12.345,00 €`.
pub fn format_eur(value: f64, locale: Locale) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let negative = value < 0.0 && cents > 0;
    let integer = (cents / 100).to_string();
    let fraction = cents % 100;

    match locale {
        Locale::EsEs => {
            let grouped = if integer.len() > 4 {
                group_thousands(&integer, '.')
            } else {
                integer
            };
            let sign = if negative { "-" } else { "" };
            format!("{sign}{grouped},{fraction:02} €")
        }
        Locale::EnUs => {
            let grouped = group_thousands(&integer, ',');
            let sign = if negative { "-" } else { "" };
            format!("{sign}€{grouped}.{fraction:02}")
        }
    }
}

/// Formats a plain number with a fixed number of decimals in the given locale.
pub fn format_decimal(value: f64, decimals: usize, locale: Locale) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let rendered = format!("{value:.decimals$}");
    match locale {
        Locale::EsEs => rendered.replace('.', ","),
        Locale::EnUs => rendered,
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_or_zero_handles_garbage() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("   "), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero("12abc"), 0.0);
        assert_eq!(parse_or_zero("NaN"), 0.0);
        assert_eq!(parse_or_zero("inf"), 0.0);
    }

    #[test]
    fn parse_or_zero_reads_numbers() {
        assert_eq!(parse_or_zero("1500"), 1500.0);
        assert_eq!(parse_or_zero(" 12.5 "), 12.5);
        assert_eq!(parse_or_zero("12,5"), 12.5);
        assert_eq!(parse_or_zero("-40"), -40.0);
    }

    #[test]
    fn spanish_grouping_starts_at_five_digits() {
        assert_eq!(format_eur(0.0, Locale::EsEs), "0,00 €");
        assert_eq!(format_eur(127.5, Locale::EsEs), "127,50 €");
        assert_eq!(format_eur(1500.0, Locale::EsEs), "1500,00 €");
        assert_eq!(format_eur(12_345.678, Locale::EsEs), "12.345,68 €");
        assert_eq!(format_eur(1_234_567.0, Locale::EsEs), "1.234.567,00 €");
        assert_eq!(format_eur(-25_000.0, Locale::EsEs), "-25.000,00 €");
    }

    #[test]
    fn english_grouping() {
        assert_eq!(format_eur(1500.0, Locale::EnUs), "€1,500.00");
        assert_eq!(format_eur(-0.004, Locale::EnUs), "€0.00");
        assert_eq!(format_eur(f64::NAN, Locale::EnUs), "€0.00");
    }

    #[test]
    fn decimals_follow_locale() {
        assert_eq!(format_decimal(2.941_176, 2, Locale::EsEs), "2,94");
        assert_eq!(format_decimal(2.941_176, 1, Locale::EnUs), "2.9");
    }
}
