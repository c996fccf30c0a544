use crate::core::{BatchQuote, SwapResult};
use crate::utils::usd_difference;
use colored::*;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use std::fmt;
use std::io::Write;

/// Write a single value with no trailing newline, for consumption by other tools.
pub fn emit<W: Write>(out: &mut W, value: &str) -> SwapResult<()> {
    out.write_all(value.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// One block of the batch report
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    pub label: String,
    pub src_usd: Decimal,
    pub dest_usd: Decimal,
    pub difference: Decimal,
    pub src_amount: String,
    pub dest_amount: String,
}

impl BatchReport {
    pub fn from_quote(quote: &BatchQuote) -> SwapResult<Self> {
        let src_usd = quote.route.src_usd()?;
        let dest_usd = quote.route.dest_usd()?;

        Ok(Self {
            label: quote.label.clone(),
            src_usd,
            dest_usd,
            difference: usd_difference(src_usd, dest_usd),
            src_amount: quote.route.src_amount()?.to_string(),
            dest_amount: quote.route.dest_amount()?.to_string(),
        })
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{}", self.label)?;
        writeln!(f, "SRC: {}", self.src_usd)?;
        writeln!(f, "DST: {}", self.dest_usd)?;
        writeln!(f, "DIF: {:.2}", self.difference)?;
        writeln!(f)?;
        writeln!(f, "SRC: {}", self.src_amount)?;
        writeln!(f, "DST: {}", self.dest_amount)
    }
}

/// Display helper for quote output meant for people
pub struct QuoteDisplay;

impl QuoteDisplay {
    /// Write every batch block in preset order. Nothing else goes to `out`.
    pub fn display_batch<W: Write>(out: &mut W, reports: &[BatchReport]) -> SwapResult<()> {
        for report in reports {
            writeln!(out, "{}", report)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Cheapest size and a unit hint, on stderr next to the spinner
    pub fn display_summary(reports: &[BatchReport]) {
        if let Some(best) = reports.iter().min_by_key(|r| r.difference) {
            eprintln!(
                "{} #{} loses {} USD",
                "Lowest cost:".bold().green(),
                best.label,
                format_difference(best.difference)
            );
        }

        eprintln!("{}", style("Amounts are in the tokens' smallest units").dim());
    }

    /// Create a progress bar for operations
    pub fn create_progress_bar(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        pb
    }
}

/// Format USD difference with color
fn format_difference(difference: Decimal) -> ColoredString {
    let text = format!("{:.2}", difference);
    if difference <= Decimal::ZERO {
        text.green()
    } else if difference < Decimal::ONE {
        text.yellow()
    } else {
        text.red()
    }
}
