//! Configuration options for SNBT parsing and writing.
//!
//! This module provides:
//!
//! - [`SnbtOptions`]: main configuration struct
//! - [`Style`]: compact single-line or pretty multi-line output
//!
//! ## Examples
//!
//! ```rust
//! use snbt::{compound, to_string_with_options, SnbtOptions, Style};
//!
//! let tag = snbt::Tag::Compound(compound! { "a" => 1, "b" => "x" });
//!
//! let compact = to_string_with_options(&tag, &SnbtOptions::new());
//! assert_eq!(compact, "{a: 1, b: \"x\"}");
//!
//! let pretty = to_string_with_options(&tag, &SnbtOptions::new().with_style(Style::Pretty));
//! assert_eq!(pretty, "{\n\ta: 1,\n\tb: \"x\"\n}");
//! ```

/// Nesting limit applied by [`SnbtOptions::default`].
///
/// Parsing recurses once per open compound or list; at this depth the parse
/// fits in a 2 MiB thread stack even in unoptimised builds. Raise it with
/// [`SnbtOptions::with_max_depth`] only when the parsing thread has the stack
/// to match.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Output layout for the writer.
///
/// - **Compact**: one line, members separated by `", "`
/// - **Pretty**: one member per line, tab indentation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Compact,
    Pretty,
}

/// Configuration for both directions of the codec.
///
/// `style` only affects writing; `max_depth` only affects parsing.
///
/// # Examples
///
/// ```rust
/// use snbt::{SnbtOptions, Style};
///
/// let options = SnbtOptions::pretty().with_max_depth(64);
/// assert_eq!(options.style, Style::Pretty);
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnbtOptions {
    pub style: Style,
    pub max_depth: usize,
}

impl Default for SnbtOptions {
    fn default() -> Self {
        SnbtOptions {
            style: Style::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SnbtOptions {
    /// Creates default options (compact output, depth limit of 128).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::{SnbtOptions, Style};
    ///
    /// let options = SnbtOptions::new();
    /// assert_eq!(options.style, Style::Compact);
    /// assert_eq!(options.max_depth, 128);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for multi-line, tab-indented output.
    #[must_use]
    pub fn pretty() -> Self {
        SnbtOptions {
            style: Style::Pretty,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn compact() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets how many compounds and lists may be open at once while parsing.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
