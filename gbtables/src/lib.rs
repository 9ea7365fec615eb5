//! Lookup tables for a Game Boy pixel pipeline.
//!
//! [`tiling`] decodes 2bpp tile rows and [`color`] converts CGB colors to
//! RGB565. Both enumerate their whole input domain into a table that [`emit`]
//! renders as source code. The same tables are generated at build time and
//! embedded in [`lut`].

pub mod color;
pub mod emit;
pub mod error;
pub mod lut;
pub mod table;
pub mod tiling;

pub use error::Error;
pub use table::TableKind;
