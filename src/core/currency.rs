//! Supported currencies and their display metadata.

use strum_macros::{Display, EnumString};

/// Set of currency codes accepted by the converter, independent of what
/// the remote API supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Currency {
    USD,
    COP,
    ARS,
    BRL,
    CLP,
    BOB,
}

/// Display metadata for a currency, read-only for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub singular: &'static str,
    pub plural: &'static str,
    pub symbol: &'static str,
}

impl Currency {
    /// All supported currencies, in menu order.
    pub const ALL: [Currency; 6] = [
        Currency::USD,
        Currency::COP,
        Currency::ARS,
        Currency::BRL,
        Currency::CLP,
        Currency::BOB,
    ];

    pub fn info(self) -> &'static CurrencyInfo {
        match self {
            Currency::USD => &CurrencyInfo {
                singular: "Dólar",
                plural: "Dólares",
                symbol: "$",
            },
            Currency::COP => &CurrencyInfo {
                singular: "Peso colombiano",
                plural: "Pesos colombianos",
                symbol: "$",
            },
            Currency::ARS => &CurrencyInfo {
                singular: "Peso argentino",
                plural: "Pesos argentinos",
                symbol: "$",
            },
            Currency::BRL => &CurrencyInfo {
                singular: "Real brasileño",
                plural: "Reales brasileños",
                symbol: "R$",
            },
            Currency::CLP => &CurrencyInfo {
                singular: "Peso chileno",
                plural: "Pesos chilenos",
                symbol: "$",
            },
            Currency::BOB => &CurrencyInfo {
                singular: "Boliviano",
                plural: "Bolivianos",
                symbol: "Bs",
            },
        }
    }

    pub fn singular(self) -> &'static str {
        self.info().singular
    }

    pub fn plural(self) -> &'static str {
        self.info().plural
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }
}
