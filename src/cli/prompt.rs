//! Interactive read/convert/print loop.
//!
//! Generic over input and output streams so the loop can be exercised with
//! in-memory buffers in tests.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::error;

use crate::cli::ui::{StyleType, style_text};
use crate::convert::convert;
use crate::core::rates::RateProvider;

/// Reads one line after printing a prompt. Returns `None` on end of input.
fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Runs the conversion loop until the user declines to continue or input ends.
///
/// No failure inside an iteration is fatal: bad amounts re-prompt, and fetch
/// or lookup errors are printed before the loop continues.
pub async fn run_loop<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    provider: &impl RateProvider,
) -> Result<()> {
    loop {
        let Some(raw_amount) = read_line(input, out, "Enter the amount to convert: ")? else {
            break;
        };

        let amount = match raw_amount.parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                writeln!(
                    out,
                    "{}",
                    style_text(
                        "Invalid input. Please enter a numeric value for the amount.",
                        StyleType::Error
                    )
                )?;
                continue;
            }
        };

        // Rejects NaN as well as zero and negatives
        if !(amount > 0.0) {
            writeln!(
                out,
                "{}",
                style_text("Amount must be greater than zero.", StyleType::Error)
            )?;
            continue;
        }

        let Some(from) = read_line(input, out, "Enter the currency to convert from (e.g., USD): ")?
        else {
            break;
        };
        let Some(to) = read_line(input, out, "Enter the currency to convert to (e.g., EUR): ")?
        else {
            break;
        };

        let from = from.to_uppercase();
        let to = to.to_uppercase();

        match convert(provider, amount, &from, &to).await {
            Ok(conversion) => {
                writeln!(out, "{}", style_text(&conversion.to_string(), StyleType::Result))?;
            }
            Err(e) => {
                error!(error = %e, "Conversion failed");
                writeln!(out, "{}", style_text(&format!("Error: {e}"), StyleType::Error))?;
                writeln!(out, "Conversion failed due to an error.")?;
            }
        }

        let Some(again) =
            read_line(input, out, "\nDo you want to convert another currency? (yes/no): ")?
        else {
            break;
        };
        if !again.eq_ignore_ascii_case("yes") {
            writeln!(
                out,
                "{}",
                style_text("Thank you for using the currency converter!", StyleType::Subtle)
            )?;
            break;
        }
    }

    Ok(())
}
