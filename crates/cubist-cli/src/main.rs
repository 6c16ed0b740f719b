//! Cubist CLI — converts a color-balance JSON file into a `.cube` LUT.
//!
//! Reads the JSON document, runs the conversion, and writes the LUT
//! next to the input (or to `--output`) under its title-derived
//! filename.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cubist_core::{ChannelMapping, ConvertOptions, convert_with};

#[derive(Debug, Parser)]
#[command(
    name = "cubist",
    about = "Convert a color-balance JSON file into a .cube 3D LUT"
)]
struct Args {
    /// Path to the input JSON document.
    input: PathBuf,

    /// Output file, or a directory to place the LUT in. Defaults to
    /// the input's directory with the title-derived filename.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Scale blue by its own factor (entry 2) instead of reusing the
    /// green factor. Off by default for compatibility with existing
    /// grading files.
    #[arg(long)]
    per_channel_blue: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let written = run(&args)?;
    println!("wrote {}", written.display());
    Ok(())
}

fn run(args: &Args) -> anyhow::Result<PathBuf> {
    let is_json = args
        .input
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        bail!("input must be a .json file: {}", args.input.display());
    }

    let bytes = fs::read(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let options = ConvertOptions {
        mapping: if args.per_channel_blue {
            ChannelMapping::PerChannel
        } else {
            ChannelMapping::SharedGreenBlue
        },
        ..ConvertOptions::default()
    };
    let conversion = convert_with(&bytes, options)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;

    let path = output_path(args.output.as_deref(), &args.input, &conversion.filename);
    fs::write(&path, &conversion.document)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("wrote {} ({} bytes)", path.display(), conversion.document.len());
    Ok(path)
}

/// Resolve where the `.cube` file lands.
///
/// An explicit output that is an existing directory gets the suggested
/// filename appended; any other explicit path wins as-is; with no
/// `--output` the LUT lands next to the input.
fn output_path(output: Option<&Path>, input: &Path, filename: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(filename),
        Some(path) => path.to_path_buf(),
        None => input.with_file_name(filename),
    }
}
