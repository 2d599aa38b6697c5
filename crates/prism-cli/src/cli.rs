// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface.
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Prism math CLI: matrix inversion and PCG32 sampling")]
pub struct Cli {
    /// Emit JSON instead of whitespace-separated text
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Invert a 4x4 matrix given as 16 row-major values
    Invert(InvertArgs),
    /// Draw values from a PCG32 stream
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
pub struct InvertArgs {
    /// Compute in single precision instead of double
    #[arg(long)]
    pub f32: bool,
    /// Row-major elements m00 m01 m02 m03 m10 ... m33
    #[arg(num_args = 16, required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Stream selector; the default stream is used when omitted
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of values to draw
    #[arg(long, default_value_t = 8)]
    pub count: usize,
    /// Jump the stream ahead (or back, if negative) before drawing
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub skip: i64,
    #[command(flatten)]
    pub mode: SampleMode,
}

#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
pub struct SampleMode {
    /// Draw unbiased integers in [0, LIMIT)
    #[arg(long, value_name = "LIMIT")]
    pub below: Option<u32>,
    /// Draw floats in [0, 1)
    #[arg(long)]
    pub real: bool,
    /// Draw floats in [LO, HI)
    #[arg(
        long,
        num_args = 2,
        value_names = ["LO", "HI"],
        allow_negative_numbers = true
    )]
    pub range: Option<Vec<f32>>,
}
