//! Tables materialized by the build script, ready for a rendering hot path.

use crate::tiling::{TileHighRowData, TileLowRowData, TileRow};

include!(concat!(env!("OUT_DIR"), "/tables_gen.rs"));

pub fn decode_tile_row(high: TileHighRowData, low: TileLowRowData) -> &'static TileRow {
    &TILE_ROW_DATA_TO_ROW_PIXELS[crate::tiling::tile_row_index(high, low)]
}

pub fn decode_tile_row_flipped(high: TileHighRowData, low: TileLowRowData) -> &'static TileRow {
    &TILE_ROW_DATA_TO_ROW_PIXELS_FLIPPED[crate::tiling::tile_row_index(high, low)]
}

/// RGB565 value of a CGB palette word. Bit 15 is ignored.
pub fn cgb_to_rgb565(pixel: u16) -> u16 {
    CGB_PALETTE_RGB565[(pixel & 0x7FFF) as usize]
}
