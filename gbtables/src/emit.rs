//! Rendering of computed tables as source code literals.

use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// Bare `{...}` array literal.
    #[default]
    Array,
    /// Include-guarded C++ header declaring a `static constexpr` array.
    Header,
    /// Rust `pub static` item.
    Rust,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Array, Format::Header, Format::Rust];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Header => "header",
            Self::Rust => "rust",
        }
    }

    fn delimiters(&self) -> (char, char) {
        match self {
            Self::Array | Self::Header => ('{', '}'),
            Self::Rust => ('[', ']'),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value that can be rendered as one table entry.
pub trait Entry {
    /// C element type.
    const C_TYPE: &'static str;
    /// Extra C array dimensions of one entry, e.g. `[8]`.
    const C_DIMENSIONS: &'static str;
    /// Rust type of one entry.
    const RUST_TYPE: &'static str;

    fn write_literal<W: Write + ?Sized>(&self, format: Format, out: &mut W) -> io::Result<()>;
}

impl Entry for u16 {
    const C_TYPE: &'static str = "uint16_t";
    const C_DIMENSIONS: &'static str = "";
    const RUST_TYPE: &'static str = "u16";

    fn write_literal<W: Write + ?Sized>(&self, _format: Format, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl Entry for [u8; 8] {
    const C_TYPE: &'static str = "uint8_t";
    const C_DIMENSIONS: &'static str = "[8]";
    const RUST_TYPE: &'static str = "[u8; 8]";

    fn write_literal<W: Write + ?Sized>(&self, format: Format, out: &mut W) -> io::Result<()> {
        let (open, close) = format.delimiters();
        write!(out, "{open}")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(out, ",")?;
            }
            write!(out, "{value}")?;
        }
        write!(out, "{close}")
    }
}

fn write_array<E: Entry, W: Write + ?Sized>(
    entries: &[E],
    format: Format,
    out: &mut W,
) -> io::Result<()> {
    let (open, close) = format.delimiters();
    write!(out, "{open}")?;
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            writeln!(out, ",")?;
        }
        entry.write_literal(format, out)?;
    }
    write!(out, "{close}")
}

/// Write `entries` as a table named `name`.
pub fn write_table<E: Entry, W: Write + ?Sized>(
    name: &str,
    entries: &[E],
    format: Format,
    out: &mut W,
) -> io::Result<()> {
    match format {
        Format::Array => {
            write_array(entries, format, out)?;
            writeln!(out)
        }
        Format::Header => {
            writeln!(out, "#ifndef {name}_H")?;
            writeln!(out, "#define {name}_H")?;
            writeln!(out)?;
            writeln!(out, "#include <cstdint>")?;
            writeln!(out)?;
            write!(
                out,
                "static constexpr {} {name}[{}]{} = ",
                E::C_TYPE,
                entries.len(),
                E::C_DIMENSIONS
            )?;
            write_array(entries, format, out)?;
            writeln!(out, ";")?;
            writeln!(out)?;
            writeln!(out, "#endif // {name}_H")
        }
        Format::Rust => {
            write!(out, "pub static {name}: [{}; {}] = ", E::RUST_TYPE, entries.len())?;
            write_array(entries, format, out)?;
            writeln!(out, ";")
        }
    }
}
