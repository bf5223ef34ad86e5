use std::str::FromStr;

use anyhow::{Context, Result};
use comfy_table::Cell;

use super::ui;
use crate::core::currency::Currency;
use crate::core::rate::RateProvider;

/// Fetches the latest rate table for `base` and renders it sorted by
/// currency code. Codes the converter knows get their display name.
pub async fn run(provider: &dyn RateProvider, base: Currency) -> Result<()> {
    let rates = provider
        .latest_table(base)
        .await
        .with_context(|| format!("No se pudo obtener la tabla de tasas para {base}"))?;

    let mut codes: Vec<&String> = rates.keys().collect();
    codes.sort();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Código"),
        ui::header_cell(&format!("Tasa (1 {base})")),
        ui::header_cell("Moneda"),
    ]);

    for code in &codes {
        let name = Currency::from_str(code.as_str())
            .map(|c| c.singular())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(code),
            ui::rate_cell(rates[*code]),
            Cell::new(name),
        ]);
    }

    println!(
        "{}",
        ui::style_text(&format!("Tasas más recientes (base {base})"), ui::StyleType::Title)
    );
    println!("{table}");
    println!(
        "{}",
        ui::style_text(&format!("{} monedas", codes.len()), ui::StyleType::Subtle)
    );

    Ok(())
}
