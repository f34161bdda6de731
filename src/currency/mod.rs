use chrono::NaiveDate;

/// Separators and date order derived from a BCP 47 language tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub day_first: bool,
}

impl LocaleConfig {
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "pt" | "es" | "de" | "it" | "nl" => (',', '.'),
            "fr" => (',', ' '),
            _ => ('.', ','),
        };
        Self {
            language_tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
            day_first: tag != "en-US",
        }
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::from_tag("pt-BR")
    }
}

pub fn symbol_for(code: &str) -> &str {
    match code {
        "BRL" => "R$ ",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        _ => code,
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats `amount` like `R$ 1.234,56` or `-$1,234.56`.
pub fn format_currency(amount: f64, code: &str, locale: &LocaleConfig) -> String {
    let code = code.to_uppercase();
    let body = format_number(locale, amount.abs(), minor_units_for(&code));
    let sign = if amount < 0.0 { "-" } else { "" };
    let symbol = symbol_for(&code);
    if symbol == code {
        format!("{sign}{code} {body}")
    } else {
        format!("{sign}{symbol}{body}")
    }
}

pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let raw = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };
    let mut body = group_digits(int_part, locale.grouping_separator);
    if let Some(frac) = frac_part {
        body.push(locale.decimal_separator);
        body.push_str(frac);
    }
    body
}

fn group_digits(digits: &str, separator: char) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

pub fn format_date(date: NaiveDate, locale: &LocaleConfig) -> String {
    if locale.day_first {
        date.format("%d/%m/%Y").to_string()
    } else {
        date.format("%m/%d/%Y").to_string()
    }
}
