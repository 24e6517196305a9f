//! Assembly data files made of `.section`, `.global`, `.balign`, `.word`
//! and `.dword` directives.
//!
//! Symbols are stored as raw little endian bytes and printed as 32-bit words.
//! Word `k` holds bytes `4k..4k+4` with the most significant byte printed
//! first, so that assembling the words on a little endian target reproduces
//! the original byte layout. A trailing partial word is padded with zeros.

use core::fmt;
use std::io::Write;

use crate::{number, Element};

/// The alignment argument of a `.balign` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alignment {
    /// A literal number of bytes.
    Bytes(usize),
    /// An expression resolved by the assembler, e.g. `NR_LANES*4`.
    Expr(String),
}

impl Alignment {
    /// An alignment expression passed through to the assembler verbatim.
    pub fn expr<S: Into<String>>(expr: S) -> Self {
        Self::Expr(expr.into())
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::Bytes(8)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(n) => write!(f, "{n}"),
            Self::Expr(e) => f.write_str(e),
        }
    }
}

/// Sections that data may be placed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// `.data`
    Data,
    /// `.sdata`, reachable with `gp`-relative addressing.
    SmallData,
    /// Any other writable section, named with its leading dot, e.g. `.l2`.
    Custom(String),
}

impl Section {
    /// The name of the section, with its leading dot.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Data => ".data",
            Self::SmallData => ".sdata",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".section {},\"aw\",@progbits", self.name())
    }
}

/// A single item in an assembly data file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Switch to a section.
    Section(Section),
    /// Export a symbol defined elsewhere in the file.
    Global(String),
    /// An exported, aligned, labelled run of bytes.
    Symbol {
        /// The label.
        name: String,
        /// The `.balign` argument.
        alignment: Alignment,
        /// The little endian contents.
        bytes: Vec<u8>,
    },
    /// A label on a single 64-bit value.
    Dword {
        /// The label.
        name: String,
        /// The value.
        value: u64,
    },
}

/// Packs bytes into 32-bit words, zero-padding the last word.
#[must_use]
pub fn words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            let mut word = [0_u8; 4];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word)
        })
        .collect()
}

/// An ordered list of directives that renders to assembly text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmFile {
    /// The directives, in output order.
    directives: Vec<Directive>,
    /// Leading whitespace for `.word` lines.
    indent: String,
}

impl Default for AsmFile {
    fn default() -> Self {
        Self::new()
    }
}

impl AsmFile {
    /// Creates an empty file with `.word` lines indented by four spaces.
    #[must_use]
    pub fn new() -> Self {
        Self {
            directives: Vec::new(),
            indent: "    ".to_string(),
        }
    }

    /// Changes the leading whitespace of `.word` lines.
    #[must_use]
    pub fn with_indent(mut self, indent: &str) -> Self {
        indent.clone_into(&mut self.indent);
        self
    }

    /// The directives in output order.
    #[must_use]
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Appends a raw directive.
    pub fn push(&mut self, directive: Directive) -> &mut Self {
        self.directives.push(directive);
        self
    }

    /// Switches to `section`.
    pub fn section(&mut self, section: Section) -> &mut Self {
        self.push(Directive::Section(section))
    }

    /// Exports `name`.
    pub fn global(&mut self, name: &str) -> &mut Self {
        self.push(Directive::Global(name.to_string()))
    }

    /// Labels a single 64-bit value.
    pub fn dword(&mut self, name: &str, value: u64) -> &mut Self {
        self.push(Directive::Dword {
            name: name.to_string(),
            value,
        })
    }

    /// Exports `values` as an aligned symbol called `name`.
    pub fn symbol<T: Element>(&mut self, name: &str, values: &[T], alignment: Alignment) -> &mut Self {
        self.push(Directive::Symbol {
            name: name.to_string(),
            alignment,
            bytes: number::to_le_bytes(values),
        })
    }

    /// The total number of `.word` lines the file will contain.
    #[must_use]
    pub fn num_words(&self) -> usize {
        self.directives
            .iter()
            .map(|d| match d {
                Directive::Symbol { bytes, .. } => bytes.len().div_ceil(4),
                _ => 0,
            })
            .sum()
    }

    /// Writes the file to `writer`.
    ///
    /// # Errors
    ///
    /// * If the writer fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), String> {
        write!(writer, "{self}").map_err(|e| e.to_string())
    }
}

impl fmt::Display for AsmFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for directive in &self.directives {
            match directive {
                Directive::Section(section) => writeln!(f, "{section}")?,
                Directive::Global(name) => writeln!(f, ".global {name}")?,
                Directive::Dword { name, value } => writeln!(f, "{name}: .dword {value}")?,
                Directive::Symbol { name, alignment, bytes } => {
                    writeln!(f, ".global {name}")?;
                    writeln!(f, ".balign {alignment}")?;
                    writeln!(f, "{name}:")?;
                    for word in words(bytes) {
                        writeln!(f, "{}.word 0x{word:08x}", self.indent)?;
                    }
                }
            }
        }
        Ok(())
    }
}
