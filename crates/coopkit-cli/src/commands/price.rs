//! `coopkit price`: estimate the price of a coop.

use serde::Serialize;
use tracing::{info, instrument};

use coopkit_core::domain::{Configuration, Price, PriceLine};

use crate::{
    cli::{PriceArgs, RenderFormat},
    commands::configurator,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// JSON shape of the `price` result.
#[derive(Debug, Serialize)]
struct PriceReport<'a> {
    configuration: &'a Configuration,
    price: Price,
    display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a [PriceLine]>,
}

#[instrument(skip_all)]
pub fn execute(args: PriceArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let selection = args.selection.resolve(&config.defaults);
    let service = configurator(&config, RenderFormat::Svg)?;

    let estimate = service.estimate(&selection);
    info!(price = %estimate.price, "Price estimated");

    if output.is_json() {
        return output.json(&PriceReport {
            configuration: &estimate.configuration,
            price: estimate.price,
            display: estimate.price.to_string(),
            breakdown: args.breakdown.then_some(estimate.breakdown.as_slice()),
        });
    }

    output.header(&selection.to_string())?;
    if args.breakdown {
        for row in breakdown_rows(&estimate.breakdown, estimate.price) {
            output.print(&row)?;
        }
    }
    output.data(&format!("Estimated price: {}", estimate.price))?;

    Ok(())
}

/// One row per term, a rule under the amounts, then the rounded total in
/// the same column.
fn breakdown_rows(lines: &[PriceLine], total: Price) -> Vec<String> {
    let row = |label: &str, value: &str| format!("  {label:<16}{value:>10}");
    let mut rows: Vec<String> = lines
        .iter()
        .map(|line| row(line.label, &amount(line.amount)))
        .collect();
    rows.push(row("", &"-".repeat(10)));
    rows.push(row("Total", &total.to_string()));
    rows
}

/// Whole-dollar amounts print like [`Price`]; fractional ones with cents.
fn amount(value: f64) -> String {
    if value.fract() == 0.0 && value >= 0.0 {
        Price::new(value as u64).to_string()
    } else {
        format!("${value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_format_like_prices() {
        assert_eq!(amount(3200.0), "$3,200");
        assert_eq!(amount(0.0), "$0");
        assert_eq!(amount(12.5), "$12.50");
    }

    #[test]
    fn breakdown_ends_with_aligned_total() {
        let lines = [
            PriceLine {
                label: "Base",
                amount: 3200.0,
            },
            PriceLine {
                label: "Timed door",
                amount: 180.0,
            },
        ];
        let rows = breakdown_rows(&lines, Price::new(3380));

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], "  Timed door            $180");
        assert_eq!(rows[2], format!("  {}{}", " ".repeat(16), "-".repeat(10)));
        assert_eq!(rows[3], "  Total               $3,380");
        assert!(rows.iter().all(|r| r.chars().count() == 28));
    }

    #[test]
    fn report_omits_breakdown_unless_requested() {
        let config = Configuration::default();
        let report = PriceReport {
            configuration: &config,
            price: Price::new(7320),
            display: "$7,320".into(),
            breakdown: None,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["price"], 7320);
        assert_eq!(json["display"], "$7,320");
        assert!(json.get("breakdown").is_none());
    }
}
