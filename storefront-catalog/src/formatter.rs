use storefront_shared::Money;

/// Turns an amount and its ISO currency code into a display string
pub trait MoneyFormatter: Send + Sync {
    fn format(&self, money: &Money) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy)]
struct LocaleConventions {
    group_separator: &'static str,
    decimal_separator: &'static str,
    position: SymbolPosition,
}

impl LocaleConventions {
    fn for_locale(locale: &str) -> Self {
        match locale {
            "de_DE" | "de_AT" | "it_IT" | "es_ES" | "nl_NL" => Self {
                group_separator: ".",
                decimal_separator: ",",
                position: SymbolPosition::Suffix,
            },
            "fr_FR" | "fr_BE" => Self {
                group_separator: "\u{a0}",
                decimal_separator: ",",
                position: SymbolPosition::Suffix,
            },
            // en_US, en_GB, ja_JP and anything unknown
            _ => Self {
                group_separator: ",",
                decimal_separator: ".",
                position: SymbolPosition::Prefix,
            },
        }
    }
}

/// Locale-aware money formatting for the locales the storefront ships with.
///
/// Unknown locales format like `en_US`. Unknown currencies are written with
/// their ISO code instead of a symbol.
#[derive(Debug, Clone)]
pub struct LocaleMoneyFormatter {
    locale: String,
    conventions: LocaleConventions,
}

impl LocaleMoneyFormatter {
    pub fn new(locale: impl Into<String>) -> Self {
        let locale = locale.into();
        let conventions = LocaleConventions::for_locale(&locale);
        Self { locale, conventions }
    }

    fn symbol(&self, currency_code: &str) -> Option<&'static str> {
        match currency_code {
            "USD" if self.locale == "en_US" => Some("$"),
            "USD" => Some("US$"),
            "EUR" => Some("€"),
            "GBP" => Some("£"),
            "JPY" => Some("¥"),
            _ => None,
        }
    }

    fn group(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(self.conventions.group_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

impl Default for LocaleMoneyFormatter {
    fn default() -> Self {
        Self::new("en_US")
    }
}

impl MoneyFormatter for LocaleMoneyFormatter {
    fn format(&self, money: &Money) -> String {
        let digits = money.fraction_digits();
        let scale = 10_u64.pow(digits);
        let magnitude = money.value.unsigned_abs();

        let mut number = self.group(&(magnitude / scale).to_string());
        if digits > 0 {
            number.push_str(self.conventions.decimal_separator);
            number.push_str(&format!("{:0width$}", magnitude % scale, width = digits as usize));
        }

        let sign = if money.value < 0 { "-" } else { "" };
        match (self.symbol(&money.currency_code), self.conventions.position) {
            (Some(symbol), SymbolPosition::Prefix) => format!("{sign}{symbol}{number}"),
            (Some(symbol), SymbolPosition::Suffix) => format!("{sign}{number}\u{a0}{symbol}"),
            (None, SymbolPosition::Prefix) => format!("{sign}{} {number}", money.currency_code),
            (None, SymbolPosition::Suffix) => format!("{sign}{number}\u{a0}{}", money.currency_code),
        }
    }
}
