//! Interactive conversion menu.
//!
//! The session is an explicit four-state machine over an injected input
//! and output stream, so every branch can be driven from tests without a
//! terminal or a live provider.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::debug;

use crate::core::convert::Conversion;
use crate::core::currency::Currency;
use crate::core::format::format_amount;
use crate::core::rate::RateProvider;

/// Pair shortcuts offered as menu options 1 to 6.
const PRESET_PAIRS: [(Currency, Currency); 6] = [
    (Currency::USD, Currency::COP),
    (Currency::COP, Currency::USD),
    (Currency::USD, Currency::ARS),
    (Currency::ARS, Currency::USD),
    (Currency::USD, Currency::BRL),
    (Currency::CLP, Currency::USD),
];

enum State {
    Menu,
    CustomPair,
    Convert { base: Currency, target: Currency },
    Done,
}

pub struct Session<'a, R, W> {
    input: R,
    out: W,
    provider: &'a dyn RateProvider,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, out: W, provider: &'a dyn RateProvider) -> Self {
        Session {
            input,
            out,
            provider,
        }
    }

    /// Runs the menu loop until the user exits or the input stream ends.
    pub async fn run(&mut self) -> Result<()> {
        writeln!(self.out, "========================================")?;
        writeln!(self.out, "   Bienvenido/a al Conversor de Moneda  ")?;
        writeln!(self.out, "========================================")?;

        let mut state = State::Menu;
        loop {
            state = match state {
                State::Menu => self.menu_step()?,
                State::CustomPair => self.custom_pair_step()?,
                State::Convert { base, target } => self.convert_step(base, target).await?,
                State::Done => break,
            };
        }
        Ok(())
    }

    fn menu_step(&mut self) -> Result<State> {
        writeln!(self.out)?;
        writeln!(self.out, "Elige una opción:")?;
        for (i, (base, target)) in PRESET_PAIRS.iter().enumerate() {
            writeln!(
                self.out,
                " {}) {} ({}) -> {} ({})",
                i + 1,
                base,
                base.singular(),
                target,
                target.singular()
            )?;
        }
        writeln!(self.out, " 7) Otra combinación (elige tus códigos)")?;
        writeln!(self.out, " 0) Salir")?;
        self.prompt("Opción: ")?;

        let Some(option) = self.read_int()? else {
            return Ok(State::Done);
        };
        debug!("Menu selection: {option}");

        Ok(match option {
            1..=6 => {
                let (base, target) = PRESET_PAIRS[(option - 1) as usize];
                State::Convert { base, target }
            }
            7 => State::CustomPair,
            0 => {
                writeln!(self.out, "¡Hasta pronto!")?;
                State::Done
            }
            _ => {
                writeln!(self.out, "Opción inválida.")?;
                State::Menu
            }
        })
    }

    fn custom_pair_step(&mut self) -> Result<State> {
        writeln!(self.out)?;
        writeln!(self.out, "Códigos disponibles:")?;
        writeln!(self.out, "{}", currency_listing())?;

        self.prompt("Código base (ej: USD): ")?;
        let Some(base) = self.read_token()? else {
            return Ok(State::Done);
        };
        self.prompt("Código destino (ej: COP): ")?;
        let Some(target) = self.read_token()? else {
            return Ok(State::Done);
        };

        match (Currency::from_str(&base), Currency::from_str(&target)) {
            (Ok(base), Ok(target)) => Ok(State::Convert { base, target }),
            _ => {
                writeln!(
                    self.out,
                    "Código no permitido. Usa los listados mostrados."
                )?;
                Ok(State::Menu)
            }
        }
    }

    async fn convert_step(&mut self, base: Currency, target: Currency) -> Result<State> {
        self.prompt(&format!("Ingresa el monto en {} ({}): ", base, base.singular()))?;
        let Some(amount) = self.read_amount()? else {
            return Ok(State::Done);
        };
        if amount.is_sign_negative() {
            writeln!(self.out, "El monto no puede ser negativo.")?;
            return Ok(State::Menu);
        }

        let rate = match self.provider.pair_rate(base, target).await {
            Ok(rate) => rate,
            Err(e) => {
                writeln!(self.out, "Error realizando la conversión: {e}")?;
                return Ok(State::Menu);
            }
        };

        let conversion = match Conversion::compute(amount, rate) {
            Ok(conversion) => conversion,
            Err(e) => {
                writeln!(self.out, "Error realizando la conversión: {e}")?;
                return Ok(State::Menu);
            }
        };

        writeln!(
            self.out,
            "Tasa {} ({}) -> {} ({}): {:.6}",
            base,
            base.singular(),
            target,
            target.singular(),
            rate
        )?;
        writeln!(
            self.out,
            "{} ({}) {} equivalen a {} ({}) {}",
            format_amount(conversion.amount),
            base.plural(),
            base,
            format_amount(conversion.converted),
            target.plural(),
            target
        )?;

        Ok(State::Menu)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    /// One trimmed input line; `None` once the stream is exhausted.
    fn read_token(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_int(&mut self) -> Result<Option<i64>> {
        loop {
            let Some(token) = self.read_token()? else {
                return Ok(None);
            };
            match token.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.prompt("Ingresa un número: ")?,
            }
        }
    }

    fn read_amount(&mut self) -> Result<Option<Decimal>> {
        loop {
            let Some(token) = self.read_token()? else {
                return Ok(None);
            };
            match Decimal::from_str(&token) {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.prompt("Ingresa un valor numérico: ")?,
            }
        }
    }
}

/// "USD (Dólar, símbolo $), COP (Peso colombiano, símbolo $), ..."
fn currency_listing() -> String {
    Currency::ALL
        .iter()
        .map(|c| format!("{} ({}, símbolo {})", c, c.singular(), c.symbol()))
        .collect::<Vec<_>>()
        .join(", ")
}
