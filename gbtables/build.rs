use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[allow(dead_code)]
#[path = "src/color.rs"]
mod color;
#[allow(dead_code)]
#[path = "src/emit.rs"]
mod emit;
#[allow(dead_code)]
#[path = "src/tiling.rs"]
mod tiling;

use emit::Format;

fn main() -> std::io::Result<()> {
    let out_dir = env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("tables_gen.rs");

    let mut out = BufWriter::new(File::create(&dest_path)?);
    emit::write_table(
        "TILE_ROW_DATA_TO_ROW_PIXELS",
        &tiling::generate_tile_rows(),
        Format::Rust,
        &mut out,
    )?;
    writeln!(out)?;
    emit::write_table(
        "TILE_ROW_DATA_TO_ROW_PIXELS_FLIPPED",
        &tiling::generate_tile_rows_flipped(),
        Format::Rust,
        &mut out,
    )?;
    writeln!(out)?;
    emit::write_table(
        "CGB_PALETTE_RGB565",
        &color::generate_cgb_palette(),
        Format::Rust,
        &mut out,
    )?;
    out.flush()?;

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/color.rs");
    println!("cargo:rerun-if-changed=src/emit.rs");
    println!("cargo:rerun-if-changed=src/tiling.rs");
    Ok(())
}
