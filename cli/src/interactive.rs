//! Interactive parameter collection
//!
//! Prompts until every value parses and is in range, then validates. A
//! failed validation prints the report and starts collection over.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use lcg_core_rs::{validate_parameters, GeneratorParameters, LcgEngine, ParameterError};

use crate::report::{write_report, write_sequence};

pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Ask until `check` accepts a parsed integer
    fn ask<F>(&mut self, prompt: &str, check: F) -> Result<i64>
    where
        F: Fn(i64) -> Result<(), ParameterError>,
    {
        loop {
            write!(self.out, "{}: ", prompt)?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("input closed before all parameters were entered");
            }

            let text = line.trim();
            let value = match text.parse::<i64>() {
                Ok(value) => value,
                Err(_) => {
                    writeln!(self.out, "Not an integer: '{}'", text)?;
                    continue;
                }
            };
            match check(value) {
                Ok(()) => return Ok(value),
                Err(err) => writeln!(self.out, "{}", err)?,
            }
        }
    }

    /// Collect one well-formed parameter set and seed
    pub fn collect(&mut self) -> Result<(GeneratorParameters, i64)> {
        let m = self.ask("Modulus m (> 0)", |m| {
            if m > 0 {
                Ok(())
            } else {
                Err(ParameterError::NonPositiveModulus { m })
            }
        })?;
        let a = self.ask("Multiplier a (0 <= a < m)", |a| {
            GeneratorParameters::new(a, 0, m).map(|_| ())
        })?;
        let c = self.ask("Increment c (0 <= c < m)", |c| {
            GeneratorParameters::new(a, c, m).map(|_| ())
        })?;
        let params = GeneratorParameters::new(a, c, m)?;
        let seed = self.ask("Seed X0 (0 <= X0 < m)", |seed| params.check_seed(seed))?;
        Ok((params, seed))
    }

    /// Collect, validate and retry until the parameters guarantee a full
    /// period; then print the report and `m` values
    pub fn run(&mut self) -> Result<()> {
        loop {
            let (params, seed) = self.collect()?;
            let report = validate_parameters(&params);
            writeln!(self.out)?;
            write_report(&mut self.out, &report)?;

            if !report.is_full_period() {
                tracing::info!(failed = ?report.failed_conditions(), "re-prompting for parameters");
                writeln!(self.out, "Please enter a new set of parameters.\n")?;
                continue;
            }

            let mut engine = LcgEngine::from_parameters(params, seed)?;
            writeln!(self.out)?;
            write_sequence(&mut self.out, &mut engine, params.modulus().unsigned_abs(), false)?;
            return Ok(());
        }
    }
}
