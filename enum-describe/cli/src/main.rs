//! enum-describe command line
//!
//! Runs one generation pass over a source directory and writes the units
//! to an output directory, or prints them with `--dry-run`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use enum_describe::{
    DirectorySink, EmissionSink, Generator, GeneratorConfig, MemorySink, discover_sources,
};
use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Generate description lookups for enums marked with #[describe_enum]
#[derive(Parser, Debug)]
#[command(name = "enum-describe", version, about, long_about = None)]
struct Cli {
    /// Directory holding the crate's `lib.rs` or `main.rs`
    src_dir: PathBuf,

    /// Directory to write generated units to
    #[arg(short, long, required_unless_present = "dry_run")]
    out: Option<PathBuf>,

    /// Cargo manifest to read `[package.metadata.enum-describe]` from
    #[arg(long, value_name = "PATH")]
    manifest: Option<PathBuf>,

    /// Print generated units instead of writing them
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v INFO, -vv DEBUG, -vvv TRACE, -vvvv TRACE with file/line)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Default filter directives for `-v` repeated `verbose` times.
///
/// Dependencies stay at `info` until `-vvv`; only the generator crates get
/// more detail at `-vv`.
fn verbosity_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info,enum_describe=info,enum_describe_cli=info",
        2 => "info,enum_describe=debug,enum_describe_cli=debug",
        _ => "debug,enum_describe=trace,enum_describe_cli=trace",
    }
}

/// Initialize tracing subscriber based on verbosity level.
///
/// Silent unless `-v` is given; `RUST_LOG` overrides the level mapping.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let directives =
        std::env::var("RUST_LOG").unwrap_or_else(|_| verbosity_filter(verbose).to_string());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_file(verbose >= 4)
                .with_line_number(verbose >= 4)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig> {
    match cli.manifest {
        Some(ref manifest) => GeneratorConfig::from_manifest(manifest)
            .wrap_err_with(|| format!("reading {}", manifest.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let sources = discover_sources(&cli.src_dir)
        .wrap_err_with(|| format!("scanning {}", cli.src_dir.display()))?;
    info!(files = sources.len(), index = %config.index_name, "Loaded crate sources");

    let generator = Generator::new(config);

    match cli.out {
        Some(ref out) if !cli.dry_run => {
            let mut sink = DirectorySink::new(out);
            let described = run(&generator, &sources, &mut sink)?;
            eprintln!("Described {described} enum(s) into {}", out.display());
        }
        _ => {
            let mut sink = MemorySink::new();
            run(&generator, &sources, &mut sink)?;
            for unit in sink.units() {
                println!("=== {} ===\n{}", unit.name(), unit.content());
            }
        }
    }

    Ok(())
}

fn run(
    generator: &Generator,
    sources: &[enum_describe::SourceFile],
    sink: &mut dyn EmissionSink,
) -> Result<usize> {
    generator
        .run(sources, sink)
        .wrap_err("generation pass failed")
}
