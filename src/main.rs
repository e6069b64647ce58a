use std::{
    io::{stdout, BufWriter},
    process,
};

use clap::Parser;
use colored::Colorize;
use seqprobe::{cli::Args, input::Input, run};

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    let input = Input::from_path(&args.path);
    let config = args.config();

    if !args.quiet {
        eprintln!("{}: {}", "data".bold(), input.to_string().underline().bold().blue());
        eprintln!("{}: {}", "k-length".bold(), config.k.to_string().blue().bold());
        if config.min_length > 0 {
            eprintln!(
                "{}: {}",
                "min-length".bold(),
                config.min_length.to_string().blue().bold()
            );
        }
        eprintln!();
    }

    let out = BufWriter::new(stdout().lock());
    if let Err(e) = run::run(&input, &config, out) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
