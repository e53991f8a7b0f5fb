//! Human-readable rendering of validation results and sequences

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io::{self, Write};

use lcg_core_rs::{LcgEngine, ValidationReport};
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

fn mark(ok: bool) -> &'static str {
    if ok {
        "PASS"
    } else {
        "FAIL"
    }
}

fn format_set(values: &BTreeSet<i64>) -> String {
    let items: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("{{{}}}", items.join(", "))
}

/// Write the per-condition explanation followed by the verdict
pub fn write_report<W: Write>(out: &mut W, report: &ValidationReport) -> io::Result<()> {
    let (a, c, m) = (report.multiplier, report.increment, report.modulus);
    let a_minus_one = i128::from(a) - 1;

    writeln!(out, "Parameters: a = {}, c = {}, m = {}", a, c, m)?;

    writeln!(
        out,
        "[{}] 1. gcd(c, m) = gcd({}, {}) = {} (must be 1)",
        mark(report.coprime_ok),
        c,
        m,
        report.gcd
    )?;

    if report.prime_factors.is_empty() {
        writeln!(
            out,
            "[{}] 2. m = {} has no prime factors, nothing to check",
            mark(report.factor_divisibility_ok),
            m
        )?;
    } else if report.factor_divisibility_ok {
        writeln!(
            out,
            "[{}] 2. a - 1 = {} is divisible by every prime factor of m {}",
            mark(true),
            a_minus_one,
            format_set(&report.prime_factors)
        )?;
    } else {
        writeln!(
            out,
            "[{}] 2. a - 1 = {} is not divisible by prime factor(s) {} of m (factors {})",
            mark(false),
            a_minus_one,
            format_set(&report.failing_factors),
            format_set(&report.prime_factors)
        )?;
    }

    if report.modulus_divisible_by_four {
        writeln!(
            out,
            "[{}] 3. m is divisible by 4, so a - 1 = {} must be too",
            mark(report.mod4_ok),
            a_minus_one
        )?;
    } else {
        writeln!(
            out,
            "[{}] 3. m is not divisible by 4, condition does not apply",
            mark(report.mod4_ok)
        )?;
    }

    if report.is_full_period() {
        writeln!(out, "Verdict: full period of length {}", m)
    } else {
        writeln!(out, "Verdict: full period NOT guaranteed")
    }
}

/// Print the seed and then `count` values, one per line
pub fn write_sequence<W: Write>(
    out: &mut W,
    engine: &mut LcgEngine,
    count: u64,
    normalized: bool,
) -> io::Result<()> {
    let m = engine.modulus() as f64;
    if normalized {
        writeln!(out, "U0 = {:.6}", engine.current() as f64 / m)?;
    } else {
        writeln!(out, "X0 = {}", engine.current())?;
    }

    for n in 1..=count {
        if normalized {
            writeln!(out, "U{} = {:.6}", n, engine.next_normalized())?;
        } else {
            writeln!(out, "X{} = {}", n, engine.next_integer())?;
        }
    }
    Ok(())
}

/// JSON body of `generate`
#[derive(Serialize)]
struct GenerateOutput<'a> {
    report: &'a ValidationReport,
    seed: i64,
    values: StreamedValues<'a>,
}

/// Steps the engine while serializing, one element at a time
struct StreamedValues<'a> {
    engine: RefCell<&'a mut LcgEngine>,
    count: u64,
    normalized: bool,
}

impl Serialize for StreamedValues<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut engine = self.engine.borrow_mut();
        let mut seq = serializer.serialize_seq(None)?;
        for _ in 0..self.count {
            if self.normalized {
                seq.serialize_element(&engine.next_normalized())?;
            } else {
                seq.serialize_element(&engine.next_integer())?;
            }
        }
        seq.end()
    }
}

/// Write `{ "report", "seed", "values" }` without holding the values in memory
pub fn write_sequence_json<W: Write>(
    out: W,
    report: &ValidationReport,
    engine: &mut LcgEngine,
    count: u64,
    normalized: bool,
) -> serde_json::Result<()> {
    let seed = engine.current();
    let body = GenerateOutput {
        report,
        seed,
        values: StreamedValues {
            engine: RefCell::new(engine),
            count,
            normalized,
        },
    };
    serde_json::to_writer_pretty(out, &body)
}
