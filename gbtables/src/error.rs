use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("could not write table to '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write table: {0}")]
    Write(#[from] io::Error),

    #[error("unknown table '{0}' (expected one of: tile-rows, tile-rows-flipped, cgb-palette)")]
    UnknownTable(String),

    #[error("unknown output format '{0}' (expected one of: array, header, rust)")]
    UnknownFormat(String),
}
