use std::{fmt, fs, io::Write, path::Path, str::FromStr};

use crate::color::generate_cgb_palette;
use crate::emit::{self, Entry, Format};
use crate::error::Error;
use crate::tiling::{generate_tile_rows, generate_tile_rows_flipped};

/// The tables this crate knows how to generate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TableKind {
    TileRows,
    TileRowsFlipped,
    CgbPalette,
}

impl TableKind {
    pub const ALL: [TableKind; 3] = [
        TableKind::TileRows,
        TableKind::TileRowsFlipped,
        TableKind::CgbPalette,
    ];

    /// Identifier of the emitted constant.
    pub fn const_name(&self) -> &'static str {
        match self {
            Self::TileRows => "TILE_ROW_DATA_TO_ROW_PIXELS",
            Self::TileRowsFlipped => "TILE_ROW_DATA_TO_ROW_PIXELS_FLIPPED",
            Self::CgbPalette => "CGB_PALETTE_RGB565",
        }
    }

    pub fn command_name(&self) -> &'static str {
        match self {
            Self::TileRows => "tile-rows",
            Self::TileRowsFlipped => "tile-rows-flipped",
            Self::CgbPalette => "cgb-palette",
        }
    }

    /// Generate the table and write it to `out`.
    pub fn write<W: Write + ?Sized>(&self, format: Format, out: &mut W) -> Result<(), Error> {
        match self {
            Self::TileRows => self.emit(&generate_tile_rows(), format, out),
            Self::TileRowsFlipped => self.emit(&generate_tile_rows_flipped(), format, out),
            Self::CgbPalette => self.emit(&generate_cgb_palette(), format, out),
        }
    }

    pub fn render(&self, format: Format) -> Result<String, Error> {
        let mut out = Vec::new();
        self.write(format, &mut out)?;
        // The emitter only writes ASCII.
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    /// Generate the table and write it to `path`, replacing any existing file.
    ///
    /// The whole table is rendered in memory first so a failed generation
    /// never leaves a truncated file behind.
    pub fn write_to_path(&self, format: Format, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let text = self.render(format)?;

        fs::write(path, text).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("wrote {} ({}) to {}", self.const_name(), format, path.display());
        Ok(())
    }

    fn emit<E: Entry, W: Write + ?Sized>(
        &self,
        entries: &[E],
        format: Format,
        out: &mut W,
    ) -> Result<(), Error> {
        log::debug!(
            "emitting {} entries of {} as {}",
            entries.len(),
            self.const_name(),
            format
        );
        emit::write_table(self.const_name(), entries, format, out)?;
        Ok(())
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_name())
    }
}

impl FromStr for TableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.command_name() == s || kind.const_name() == s)
            .ok_or_else(|| Error::UnknownTable(s.to_owned()))
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownFormat(s.to_owned()))
    }
}
