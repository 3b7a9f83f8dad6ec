use serde::Serialize;

use crate::catalog::PriceCatalog;

/// Which amount field the user last edited. The caller asks for the other
/// side only, so a quote never feeds back into the side it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    From,
    To,
}

/// A computed pair of amounts plus the implied exchange rate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConversionQuote {
    pub from_currency: String,
    pub to_currency: String,
    pub from_amount: f64,
    pub to_amount: f64,
    pub rate: f64,
}

/// Why no quote could be produced. An expected outcome, not a failure;
/// callers leave their amounts unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Unresolved {
    UnknownCurrency(String),
    SameCurrency,
    InvalidAmount,
    ZeroPrice(String),
}

/// Compute the counterpart amount for an edit on one side.
///
/// `rate = price(from) / price(to)`. Editing the from side derives
/// `to = amount * rate`; editing the to side derives `from = amount / rate`.
/// Stateless: every call reads only the catalog snapshot it is given.
pub fn quote(
    catalog: &PriceCatalog,
    from_currency: &str,
    to_currency: &str,
    amount: f64,
    edited: Side,
) -> Result<ConversionQuote, Unresolved> {
    if from_currency == to_currency {
        return Err(Unresolved::SameCurrency);
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Unresolved::InvalidAmount);
    }

    let from_price = catalog
        .price(from_currency)
        .ok_or_else(|| Unresolved::UnknownCurrency(from_currency.to_string()))?;
    let to_price = catalog
        .price(to_currency)
        .ok_or_else(|| Unresolved::UnknownCurrency(to_currency.to_string()))?;

    if from_price == 0.0 {
        return Err(Unresolved::ZeroPrice(from_currency.to_string()));
    }
    if to_price == 0.0 {
        return Err(Unresolved::ZeroPrice(to_currency.to_string()));
    }

    let rate = from_price / to_price;
    let (from_amount, to_amount) = match edited {
        Side::From => (amount, amount * rate),
        Side::To => (amount / rate, amount),
    };

    Ok(ConversionQuote {
        from_currency: from_currency.to_string(),
        to_currency: to_currency.to_string(),
        from_amount,
        to_amount,
        rate,
    })
}

impl ConversionQuote {
    /// Exchange the two sides without consulting the catalog. The computed
    /// amounts carry over verbatim, so a price tick between edits cannot
    /// silently change them.
    pub fn swapped(self) -> ConversionQuote {
        ConversionQuote {
            from_currency: self.to_currency,
            to_currency: self.from_currency,
            from_amount: self.to_amount,
            to_amount: self.from_amount,
            rate: 1.0 / self.rate,
        }
    }

    // Amounts stay full-precision internally; rounding happens only in
    // these display accessors.

    pub fn formatted_from_amount(&self, decimals: usize) -> String {
        format!("{:.prec$}", self.from_amount, prec = decimals)
    }

    pub fn formatted_to_amount(&self, decimals: usize) -> String {
        format!("{:.prec$}", self.to_amount, prec = decimals)
    }

    pub fn formatted_rate(&self, decimals: usize) -> String {
        format!("{:.prec$}", self.rate, prec = decimals)
    }
}
