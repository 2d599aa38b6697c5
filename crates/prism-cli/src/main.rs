// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Prism CLI entrypoint.
//!
//! # Usage
//! ```text
//! prism invert [--f32] <m00> <m01> ... <m33>
//! prism sample [--seed N] [--count N] [--skip N] [--below L | --real | --range LO HI]
//! ```
//!
//! Results go to stdout (text or `--json`); diagnostics go to stderr and are
//! filtered with `RUST_LOG` (default `info`). Exits non-zero on singular
//! matrices and invalid arguments.
// The CLI is expected to print to stdout.
#![allow(clippy::print_stdout)]

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use prism_math::{Matrix4x4, Real, Rng};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, InvertArgs, SampleArgs};

#[derive(Serialize)]
struct InverseReport<T> {
    rows: [[T; 4]; 4],
}

#[derive(Serialize)]
#[serde(untagged)]
enum Samples {
    Integers(Vec<u32>),
    Reals(Vec<f32>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Command::Invert(args) => invert(&args, cli.json),
        Command::Sample(args) => sample(&args, cli.json),
    }
}

fn rows_from(values: &[f64]) -> Result<[[f64; 4]; 4]> {
    if values.len() != 16 {
        bail!("expected 16 matrix elements, got {}", values.len());
    }
    let mut rows = [[0.0; 4]; 4];
    for (i, v) in values.iter().enumerate() {
        rows[i / 4][i % 4] = *v;
    }
    Ok(rows)
}

#[allow(clippy::cast_possible_truncation)]
fn invert(args: &InvertArgs, json: bool) -> Result<()> {
    let rows = rows_from(&args.values)?;
    let precision = if args.f32 { "f32" } else { "f64" };
    info!(precision, "inverting matrix");
    if args.f32 {
        let m = Matrix4x4::new(rows.map(|r| r.map(|v| v as f32)));
        print_inverse(&m, json)
    } else {
        print_inverse(&Matrix4x4::new(rows), json)
    }
}

fn print_inverse<T: Real + Serialize + std::fmt::Display>(
    m: &Matrix4x4<T>,
    json: bool,
) -> Result<()> {
    let inv = m.try_inverse().context("matrix is not invertible")?;
    let rows = inv.to_rows();
    if json {
        println!("{}", serde_json::to_string(&InverseReport { rows })?);
    } else {
        for row in rows {
            let line: Vec<String> = row.iter().map(ToString::to_string).collect();
            println!("{}", line.join(" "));
        }
    }
    Ok(())
}

fn sample(args: &SampleArgs, json: bool) -> Result<()> {
    let mut rng = args.seed.map_or_else(Rng::new, Rng::with_sequence);
    if args.skip != 0 {
        debug!(skip = args.skip, "advancing stream");
        rng.advance(args.skip);
    }
    info!(seed = ?args.seed, count = args.count, "drawing samples");

    let mode = &args.mode;
    let samples = if let Some(limit) = mode.below {
        if limit == 0 {
            bail!("--below requires a non-zero limit");
        }
        Samples::Integers((0..args.count).map(|_| rng.uniform_u32_below(limit)).collect())
    } else if let Some(range) = &mode.range {
        let (lo, hi) = match range.as_slice() {
            [lo, hi] => (*lo, *hi),
            _ => bail!("--range takes exactly two values"),
        };
        if lo.is_nan() || hi.is_nan() || lo > hi {
            bail!("invalid range: {lo} > {hi}");
        }
        if !(hi - lo).is_finite() {
            bail!("range bounds must be finite with a finite width: {lo}..{hi}");
        }
        Samples::Reals((0..args.count).map(|_| rng.uniform_f32_in_range(lo, hi)).collect())
    } else if mode.real {
        Samples::Reals((0..args.count).map(|_| rng.uniform_f32()).collect())
    } else {
        Samples::Integers((0..args.count).map(|_| rng.uniform_u32()).collect())
    };

    if json {
        println!("{}", serde_json::to_string(&samples)?);
    } else {
        match samples {
            Samples::Integers(values) => values.iter().for_each(|v| println!("{v}")),
            Samples::Reals(values) => values.iter().for_each(|v| println!("{v}")),
        }
    }
    Ok(())
}
