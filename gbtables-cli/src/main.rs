use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gbtables::{emit::Format, TableKind};

/// Generate the lookup tables used by the pixel pipeline.
#[derive(Parser, Debug)]
#[command(name = "gbtables", version)]
struct Args {
    #[command(subcommand)]
    table: Table,

    /// Syntax of the emitted table
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Array)]
    format: OutputFormat,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Table {
    /// 2bpp tile row decoder, indexed by `high << 8 | low`
    TileRows {
        /// Destination file (standard output if omitted)
        output: Option<PathBuf>,
    },
    /// Same as tile-rows with every row reversed
    TileRowsFlipped { output: Option<PathBuf> },
    /// CGB 15-bit color to RGB565
    CgbPalette { output: Option<PathBuf> },
}

impl Table {
    fn kind(&self) -> TableKind {
        match self {
            Self::TileRows { .. } => TableKind::TileRows,
            Self::TileRowsFlipped { .. } => TableKind::TileRowsFlipped,
            Self::CgbPalette { .. } => TableKind::CgbPalette,
        }
    }

    fn output(&self) -> Option<&PathBuf> {
        match self {
            Self::TileRows { output }
            | Self::TileRowsFlipped { output }
            | Self::CgbPalette { output } => output.as_ref(),
        }
    }
}

#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq)]
enum OutputFormat {
    Array,
    Header,
    Rust,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Array => Format::Array,
            OutputFormat::Header => Format::Header,
            OutputFormat::Rust => Format::Rust,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let kind = args.table.kind();
    let format = Format::from(args.format);

    match args.table.output() {
        Some(path) => kind
            .write_to_path(format, path)
            .with_context(|| format!("failed to generate {kind}"))?,
        None => {
            let stdout = io::stdout();
            let mut out = io::BufWriter::new(stdout.lock());
            kind.write(format, &mut out)
                .with_context(|| format!("failed to generate {kind}"))?;
            out.flush().context("failed to flush standard output")?;
        }
    }

    log::info!("generated {kind}");
    Ok(())
}
