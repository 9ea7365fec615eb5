//! Decoding of 2bpp tile rows.
//!
//! A tile row is stored as two bitplanes: the low byte holds bit 0 of every
//! pixel color id and the high byte holds bit 1, most significant bit first.

/// Number of distinct (high, low) bitplane pairs.
pub const TILE_ROW_TABLE_LEN: usize = 256 * 256;

/// Number of pixels in a decoded tile row.
pub const TILE_ROW_WIDTH: usize = 8;

/// One decoded tile row, leftmost pixel first. Every value is a color id in `0..=3`.
pub type TileRow = [u8; TILE_ROW_WIDTH];

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileLowRowData(u8);

impl From<u8> for TileLowRowData {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<TileLowRowData> for u8 {
    fn from(tile_row_low_data: TileLowRowData) -> Self {
        tile_row_low_data.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileHighRowData(u8);

impl From<u8> for TileHighRowData {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<TileHighRowData> for u8 {
    fn from(tile_row_high_data: TileHighRowData) -> Self {
        tile_row_high_data.0
    }
}

/// Index of the (high, low) pair in a tile row table.
pub fn tile_row_index(high_row_data: TileHighRowData, low_row_data: TileLowRowData) -> usize {
    (high_row_data.0 as usize) << 8 | low_row_data.0 as usize
}

pub fn tile_pixel_row(high_row_data: TileHighRowData, low_row_data: TileLowRowData) -> TileRow {
    let mut pixel_row = [0; TILE_ROW_WIDTH];

    for i in 0..TILE_ROW_WIDTH {
        let msb = (high_row_data.0 >> i) & 0x1;
        let lsb = (low_row_data.0 >> i) & 0x1;
        pixel_row[TILE_ROW_WIDTH - 1 - i] = msb << 1 | lsb;
    }

    pixel_row
}

/// Same pixels as [`tile_pixel_row`], rightmost first (X-flipped sprites).
pub fn tile_pixel_row_flipped(
    high_row_data: TileHighRowData,
    low_row_data: TileLowRowData,
) -> TileRow {
    let mut pixel_row = tile_pixel_row(high_row_data, low_row_data);
    pixel_row.reverse();
    pixel_row
}

fn generate_with(decode: fn(TileHighRowData, TileLowRowData) -> TileRow) -> Vec<TileRow> {
    let mut rows = Vec::with_capacity(TILE_ROW_TABLE_LEN);

    for high in 0..=u8::MAX {
        for low in 0..=u8::MAX {
            let (high, low) = (TileHighRowData(high), TileLowRowData(low));
            assert_eq!(rows.len(), tile_row_index(high, low));
            rows.push(decode(high, low));
        }
    }

    assert_eq!(rows.len(), TILE_ROW_TABLE_LEN);
    rows
}

/// Decoded rows for every (high, low) pair, indexed by [`tile_row_index`].
pub fn generate_tile_rows() -> Vec<TileRow> {
    generate_with(tile_pixel_row)
}

pub fn generate_tile_rows_flipped() -> Vec<TileRow> {
    generate_with(tile_pixel_row_flipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_pixel(high: u8, low: u8, p: usize) -> u8 {
        ((high >> (7 - p)) & 1) << 1 | ((low >> (7 - p)) & 1)
    }

    #[test]
    fn decodes_msb_first() {
        assert_eq!(
            tile_pixel_row(0b1000_0000.into(), 0b0100_0000.into()),
            [2, 1, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(tile_pixel_row(0xFF.into(), 0x00.into()), [2; 8]);
        assert_eq!(tile_pixel_row(0x00.into(), 0xFF.into()), [1; 8]);
        assert_eq!(tile_pixel_row(0xFF.into(), 0xFF.into()), [3; 8]);
        assert_eq!(
            tile_pixel_row(0x7E.into(), 0x3C.into()),
            [0, 2, 3, 3, 3, 3, 2, 0]
        );
    }

    #[test]
    fn flipped_row_is_reversed() {
        assert_eq!(
            tile_pixel_row_flipped(0b1000_0000.into(), 0b0100_0000.into()),
            [0, 0, 0, 0, 0, 0, 1, 2]
        );
    }

    #[test]
    fn table_covers_every_pair() {
        let rows = generate_tile_rows();
        assert_eq!(rows.len(), TILE_ROW_TABLE_LEN);
        assert_eq!(rows.iter().flatten().count(), 524_288);

        for high in 0..=u8::MAX {
            for low in 0..=u8::MAX {
                let row = rows[tile_row_index(high.into(), low.into())];
                for (p, &pixel) in row.iter().enumerate() {
                    assert_eq!(pixel, expected_pixel(high, low, p), "H={high} L={low} p={p}");
                }
            }
        }
    }

    #[test]
    fn flipped_table_mirrors_table() {
        let rows = generate_tile_rows();
        let flipped = generate_tile_rows_flipped();
        assert_eq!(flipped.len(), TILE_ROW_TABLE_LEN);

        for (row, flipped_row) in rows.iter().zip(&flipped) {
            let mut reversed = *row;
            reversed.reverse();
            assert_eq!(&reversed, flipped_row);
        }
    }

    #[test]
    fn index_is_high_major() {
        assert_eq!(tile_row_index(0.into(), 0.into()), 0);
        assert_eq!(tile_row_index(0.into(), 0xFF.into()), 0xFF);
        assert_eq!(tile_row_index(1.into(), 0.into()), 256);
        assert_eq!(tile_row_index(0xFF.into(), 0xFF.into()), TILE_ROW_TABLE_LEN - 1);
    }
}
