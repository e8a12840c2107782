use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use itertools::Itertools;

use fixed_exp::approx::{Approximator, Exponential};
use fixed_exp::opts::Opts;
use fixed_exp::utils::range::float_range;
use fixed_exp::utils::rational::{real, to_f64};

struct Row {
    x: f64,
    approx: f64,
    reference: f64,
    error: f64,
}

fn evaluate(approx: &Approximator, xs: &[f64]) -> Vec<Row> {
    xs.iter()
        .zip(approx.benchmark(xs))
        .map(|(&x, error)| Row {
            x,
            approx: approx.try_call(x),
            reference: real(x)
                .and_then(|x| approx.reference(&x))
                .map_or(f64::NAN, |y| to_f64(&y)),
            error,
        })
        .collect()
}

fn write_output(
    approx: &Approximator,
    rows: &[Row],
    bits: Option<u64>,
    file: &Option<PathBuf>,
) -> io::Result<()> {
    let mut out: Box<dyn io::Write> = if let Some(path) = file {
        Box::new(File::create(path)?)
    } else {
        Box::new(io::stdout())
    };

    writeln!(out, "# {approx}")?;

    if let Some(bits) = bits {
        writeln!(out, "# bits: {bits}")?;
    }

    writeln!(out, "x\tapproximation\treference\trelative error")?;

    for row in rows {
        writeln!(
            out,
            "{}",
            [
                row.x.to_string(),
                row.approx.to_string(),
                row.reference.to_string(),
                format!("{:e}", row.error),
            ]
            .iter()
            .join("\t")
        )?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .init();

    let approx = match Approximator::new(opts.kind, opts.decimals, opts.order)
    {
        Ok(approx) => approx,
        Err(err) => {
            eprintln!("error: {err}");

            return ExitCode::FAILURE;
        }
    };

    let xs = float_range(opts.start, opts.end, opts.step);

    if xs.is_empty() {
        log::warn!("Empty input range");
    }

    let rows = evaluate(&approx, &xs);

    let bits = if opts.bits {
        let valid = rows
            .iter()
            .filter(|row| !row.approx.is_nan())
            .map(|row| row.x)
            .collect_vec();

        match approx.max_bits(&valid) {
            Ok(Some(bits)) => Some(bits),
            Ok(None) => {
                log::warn!(
                    "`{}` does not use fixed-point arithmetic",
                    opts.kind
                );

                None
            }
            Err(err) => {
                eprintln!("error: {err}");

                return ExitCode::FAILURE;
            }
        }
    } else {
        None
    };

    if let Err(err) = write_output(&approx, &rows, bits, &opts.output) {
        eprintln!("error: {err}");

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
