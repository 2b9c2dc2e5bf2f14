use std::borrow::Cow;
use tripsplit_domain::Money;

/// Display symbol for an ISO 4217 code. Unknown codes are shown as the
/// upper-cased code itself.
pub fn currency_symbol(code: &str) -> Cow<'static, str> {
    let code = code.trim().to_uppercase();
    let symbol = match code.as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "INR" => "₹",
        "JPY" | "CNY" => "¥",
        "CAD" => "C$",
        "AUD" => "A$",
        "CHF" => "Fr",
        "SEK" | "NOK" | "DKK" => "kr",
        _ => return Cow::Owned(code),
    };
    Cow::Borrowed(symbol)
}

/// `amount` with two decimals, prefixed by the currency symbol.
pub fn format_amount(amount: Money, currency: &str) -> String {
    format!("{}{amount}", currency_symbol(currency))
}
