//! Command line front end.

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Result, bail};
use clap::Parser;
use rust_decimal::Decimal;

use rebates::{
    observability::LoggingConfig,
    service::{CalculateRebateRequest, CalculateRebateResult, RebateService},
};

/// Calculate and record a rebate.
///
/// Identifiers and volume not given as arguments are prompted for on stdin.
#[derive(Debug, Parser)]
#[command(name = "rebates", about = "Rebate calculator", long_about = None)]
pub(crate) struct Cli {
    /// Rebate identifier
    pub rebate_identifier: Option<String>,

    /// Product identifier
    pub product_identifier: Option<String>,

    /// Volume purchased
    pub volume: Option<String>,

    /// Fixture file to load rebates and products from
    #[arg(short, long, env = "REBATES_FIXTURE", default_value = "fixtures/rebates.yml")]
    pub fixture: PathBuf,

    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Cli {
    /// Build the request from arguments, prompting for anything missing.
    pub(crate) fn request<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<CalculateRebateRequest> {
        let rebate_identifier = match &self.rebate_identifier {
            Some(identifier) => identifier.clone(),
            None => prompt(input, output, "Enter Rebate Identifier: ")?,
        };

        let product_identifier = match &self.product_identifier {
            Some(identifier) => identifier.clone(),
            None => prompt(input, output, "Enter Product Identifier: ")?,
        };

        let volume = match &self.volume {
            Some(volume) => match volume.trim().parse::<Decimal>() {
                Ok(volume) => volume,
                Err(_err) => bail!("invalid volume argument: {volume}"),
            },
            None => prompt_volume(input, output)?,
        };

        Ok(CalculateRebateRequest::new(
            rebate_identifier,
            product_identifier,
            volume,
        ))
    }
}

/// Run the calculation and write a summary of the result.
pub(crate) fn calculate_and_report<W: Write>(
    service: &dyn RebateService,
    request: &CalculateRebateRequest,
    output: &mut W,
) -> Result<CalculateRebateResult> {
    let result = service.calculate(request)?;

    write_result(output, request, &result)?;

    Ok(result)
}

fn write_result<W: Write>(
    output: &mut W,
    request: &CalculateRebateRequest,
    result: &CalculateRebateResult,
) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "=== Calculation Result ===")?;
    writeln!(output, "Rebate Identifier : {}", request.rebate_identifier)?;
    writeln!(output, "Product Identifier: {}", request.product_identifier)?;
    writeln!(output, "Volume            : {}", request.volume)?;
    writeln!(output, "Success           : {}", result.is_success())?;

    if let Some(amount) = result.rebate_amount() {
        writeln!(
            output,
            "Rebate Amount     : {} {}",
            amount.amount(),
            amount.currency().iso_alpha_code
        )?;
    }

    writeln!(output, "==========================")?;

    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();

    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }

    Ok(line.trim().to_string())
}

fn prompt_volume<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Decimal> {
    let mut answer = prompt(input, output, "Enter Volume: ")?;

    loop {
        if let Ok(volume) = answer.parse::<Decimal>() {
            return Ok(volume);
        }

        answer = prompt(
            input,
            output,
            "Invalid input. Please enter a valid number for Volume: ",
        )?;
    }
}
