//! # snbt
//!
//! A typed NBT tag tree and a codec for SNBT, the stringified NBT text format
//! used by Minecraft commands, data packs and debug output.
//!
//! ## What is SNBT?
//!
//! NBT (Named Binary Tag) is a tree of typed values: six numeric widths,
//! strings, three primitive arrays, homogeneous lists and ordered compounds of
//! named members. SNBT writes that tree as text, with type suffixes on numbers
//! so the exact width survives a round trip:
//!
//! ```text
//! {Count: 1b, id: "minecraft:stone", Pos: [L; 10L, 64L, -3L], Tags: ["a", "b"]}
//! ```
//!
//! ## Key Features
//!
//! - **Typed**: every value keeps its NBT kind, from `Byte` to `LongArray`
//! - **Order-preserving**: compound members stay in insertion order
//! - **Two layouts**: compact single-line text or tab-indented pretty text
//! - **Lenient parsing**: bare words, single or double quotes, optional commas
//! - **Serde Compatible**: [`Tag`] implements `Serialize` and `Deserialize`
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use snbt::{from_str, to_string, Tag};
//!
//! let tag = from_str("{name: Steve, health: 20.0f, inventory: []}").unwrap();
//!
//! let root = tag.as_compound().unwrap();
//! assert_eq!(root.get("name").and_then(Tag::as_str), Some("Steve"));
//! assert_eq!(root.get("health"), Some(&Tag::Float(20.0)));
//!
//! assert_eq!(to_string(&tag), "{name: \"Steve\", health: 20f, inventory: []}");
//! ```
//!
//! ### Building Trees
//!
//! ```rust
//! use snbt::{compound, to_string_pretty, List, Tag};
//!
//! let mut tags = List::new();
//! tags.push("first").unwrap();
//! tags.push("second").unwrap();
//! // Lists are homogeneous.
//! assert!(tags.push(3).is_err());
//!
//! let root = Tag::Compound(compound! {
//!     "tags" => tags,
//!     "ids" => vec![1i32, 2],
//! });
//! assert_eq!(
//!     to_string_pretty(&root),
//!     "{\n\ttags: [\n\t\t\"first\",\n\t\t\"second\"\n\t],\n\tids: [I; 1, 2]\n}"
//! );
//! ```
//!
//! ## Literal Typing
//!
//! | Text | Tag |
//! |------|-----|
//! | `5b`, `true`, `false` | `Byte` |
//! | `5s` | `Short` |
//! | `5`, `5i` | `Int` |
//! | `5L` | `Long` |
//! | `5.0f` | `Float` |
//! | `5.0`, `5d` | `Double` |
//! | `"text"`, `'text'`, `word` | `String` |
//! | `[B; 1b]`, `[I; 1]`, `[L; 1L]` | arrays |
//!
//! A bare token that does not fit its suffix's width (`300b`) is a string.
//!
//! ## Logging
//!
//! Parse failures are reported as `tracing` events at `debug` level, and
//! successful parses and writes at `trace` level. Install any `tracing`
//! subscriber to see them.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - parse, inspect and print a tag
//! - **`pretty_print.rs`** - compact versus pretty output
//! - **`dynamic_tags.rs`** - building and walking trees at runtime
//!
//! Run any example with: `cargo run --example <name>`

mod buffer;
pub mod compound;
pub mod convert;
pub mod cursor;
pub mod de;
pub mod error;
pub mod list;
pub mod macros;
pub mod options;
pub mod ser;
pub mod tag;
mod tokens;

pub use compound::Compound;
pub use de::Parser;
pub use error::{Error, Result};
pub use list::List;
pub use options::{SnbtOptions, Style, DEFAULT_MAX_DEPTH};
pub use ser::Writer;
pub use tag::{NamedTag, Tag, TagKind};

use std::io;

/// Parse SNBT text into a tag.
///
/// # Examples
///
/// ```rust
/// use snbt::{from_str, Tag};
///
/// let tag = from_str("[I; 1, 2, 3]").unwrap();
/// assert_eq!(tag, Tag::from(vec![1i32, 2, 3]));
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid SNBT. Syntax errors carry the
/// line and column where parsing stopped.
pub fn from_str(s: &str) -> Result<Tag> {
    from_str_with_options(s, &SnbtOptions::default())
}

/// Parse SNBT text into a tag with custom options.
///
/// # Examples
///
/// ```rust
/// use snbt::{from_str_with_options, SnbtOptions};
///
/// let options = SnbtOptions::new().with_max_depth(1);
/// assert!(from_str_with_options("{a: 1}", &options).is_ok());
/// assert!(from_str_with_options("{a: {}}", &options).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid SNBT or nests deeper than
/// `options.max_depth`.
pub fn from_str_with_options(s: &str, options: &SnbtOptions) -> Result<Tag> {
    Parser::with_options(s, options).parse()
}

/// Parse SNBT from bytes.
///
/// # Examples
///
/// ```rust
/// use snbt::{from_slice, Tag};
///
/// assert_eq!(from_slice(b"12s").unwrap(), Tag::Short(12));
/// assert!(from_slice(&[0x22, 0xff, 0x22]).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid SNBT.
pub fn from_slice(v: &[u8]) -> Result<Tag> {
    let s = std::str::from_utf8(v).map_err(|e| Error::io(&e.to_string()))?;
    from_str(s)
}

/// Parse SNBT from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use snbt::{from_reader, Tag};
/// use std::io::Cursor;
///
/// let tag = from_reader(Cursor::new("{a: 1b}")).unwrap();
/// assert!(tag.is_compound());
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the stream is not UTF-8, or the text is
/// not valid SNBT.
pub fn from_reader<R>(mut reader: R) -> Result<Tag>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Write a tag as compact, single-line SNBT.
///
/// # Examples
///
/// ```rust
/// use snbt::{compound, to_string, Tag};
///
/// let tag = Tag::Compound(compound! { "x" => 1.5, "y" => -2i16 });
/// assert_eq!(to_string(&tag), "{x: 1.5d, y: -2s}");
/// ```
#[must_use]
pub fn to_string(tag: &Tag) -> String {
    to_string_with_options(tag, &SnbtOptions::compact())
}

/// Write a tag as multi-line SNBT, indented with tabs.
#[must_use]
pub fn to_string_pretty(tag: &Tag) -> String {
    to_string_with_options(tag, &SnbtOptions::pretty())
}

/// Write a tag using the layout selected by `options.style`.
#[must_use]
pub fn to_string_with_options(tag: &Tag, options: &SnbtOptions) -> String {
    let mut writer = Writer::new(options);
    writer.write_tag(tag);
    writer.into_inner()
}

/// Write a tag as compact SNBT to an I/O stream.
///
/// # Examples
///
/// ```rust
/// use snbt::{to_writer, Tag};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Tag::Long(7)).unwrap();
/// assert_eq!(buffer, b"7L");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the stream fails.
pub fn to_writer<W>(writer: W, tag: &Tag) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, tag, &SnbtOptions::default())
}

/// Write a tag to an I/O stream with custom options.
///
/// # Errors
///
/// Returns an error if writing to the stream fails.
pub fn to_writer_with_options<W>(mut writer: W, tag: &Tag, options: &SnbtOptions) -> Result<()>
where
    W: io::Write,
{
    let snbt = to_string_with_options(tag, options);
    writer
        .write_all(snbt.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    tracing::trace!(bytes = snbt.len(), kind = %tag.kind(), "wrote SNBT");
    Ok(())
}
