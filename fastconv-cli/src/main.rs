use anyhow::Result;
use clap::Parser;
use fastconv_cli::{parse_sequence, render, Method, DEFAULT_A, DEFAULT_B};

/// Convolve two real sequences directly and through the FFT, and print both.
#[derive(Parser)]
#[command(name = "fastconv", version, about)]
struct Args {
    /// First sequence, comma or space separated
    #[arg(short, long, default_value = DEFAULT_A, allow_hyphen_values = true)]
    a: String,

    /// Second sequence, comma or space separated
    #[arg(short, long, default_value = DEFAULT_B, allow_hyphen_values = true)]
    b: String,

    /// Which convolution paths to run
    #[arg(long, value_enum, default_value_t = Method::Both)]
    method: Method,

    /// Print padded inputs and spectra of the FFT path, and debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let a = parse_sequence(&args.a)?;
    let b = parse_sequence(&args.b)?;
    print!("{}", render(&a, &b, args.method, args.verbose)?);
    Ok(())
}
