//! Lexical vocabulary shared by the parser and the writer.

pub(crate) const COMPOUND_BEGIN: char = '{';
pub(crate) const COMPOUND_END: char = '}';
pub(crate) const KEY_VALUE_SEPARATOR: char = ':';
pub(crate) const ARRAY_BEGIN: char = '[';
pub(crate) const ARRAY_END: char = ']';
pub(crate) const ARRAY_SIGNATURE_SEPARATOR: char = ';';
pub(crate) const VALUE_SEPARATOR: char = ',';

pub(crate) const SINGLE_QUOTE: char = '\'';
pub(crate) const DOUBLE_QUOTE: char = '"';
pub(crate) const ESCAPE_MARKER: char = '\\';

pub(crate) const NEWLINE: char = '\n';
pub(crate) const INDENT: char = '\t';

pub(crate) const TYPE_BYTE: char = 'b';
pub(crate) const TYPE_SHORT: char = 's';
pub(crate) const TYPE_INT: char = 'i';
pub(crate) const TYPE_LONG: char = 'l';
pub(crate) const TYPE_FLOAT: char = 'f';
pub(crate) const TYPE_DOUBLE: char = 'd';

pub(crate) const TYPE_BYTE_UPPER: char = 'B';
pub(crate) const TYPE_INT_UPPER: char = 'I';
pub(crate) const TYPE_LONG_UPPER: char = 'L';

pub(crate) const LITERAL_TRUE: &str = "true";
pub(crate) const LITERAL_FALSE: &str = "false";

pub(crate) const LITERAL_NAN: &str = "NaN";
pub(crate) const LITERAL_INFINITY: &str = "Infinity";

/// Characters that may appear in a bare (unquoted) token.
#[inline]
pub(crate) fn is_allowed_in_unquoted(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+')
}

/// Format characters skipped between tokens: space, tab, CR, LF and NUL.
#[inline]
pub(crate) fn is_format_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\0')
}

/// A compound key must be quoted when it is empty or contains anything a
/// bare token cannot.
#[inline]
pub(crate) fn needs_quotation(name: &str) -> bool {
    name.is_empty() || !name.chars().all(is_allowed_in_unquoted)
}
