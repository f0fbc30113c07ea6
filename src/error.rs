use std::fmt;
use std::io;

use quick_xml::events::attributes::AttrError;

/// Errors raised while generating the time zone tables.
#[derive(Debug)]
pub enum Error {
    /// Bad arguments or paths. Reported together with the usage text; nothing
    /// has been written when this is returned.
    Usage(String),
    /// An input or output file could not be read or written.
    Io(io::Error),
    /// The CLDR XML could not be parsed.
    Xml(quick_xml::Error),
    /// The CLDR content is inconsistent with the curated tables, e.g. a
    /// Windows ID that is missing from `tables::WINDOWS_ID_LIST`.
    Data(String),
    /// A string pool index no longer fits in 16 bits.
    Range(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Usage(message) => f.write_str(message),
            Error::Io(error) => write!(f, "{}", error),
            Error::Xml(error) => write!(f, "invalid XML: {}", error),
            Error::Data(message) => f.write_str(message),
            Error::Range(message) => write!(f, "range error: {}", message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(error) => Some(error),
            Error::Xml(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(error: quick_xml::Error) -> Self {
        Error::Xml(error)
    }
}

impl From<AttrError> for Error {
    fn from(error: AttrError) -> Self {
        Error::Xml(quick_xml::Error::InvalidAttr(error))
    }
}

/// Wraps `text` at `width` columns for terminal display.
///
/// Continuation lines are indented by one space, marking them as part of the
/// same message.
pub fn wrap(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut line_len = 0;
    for word in text.split_whitespace() {
        if line_len == 0 {
            out.push_str(word);
            line_len = word.len();
        } else if line_len + 1 + word.len() > width {
            out.push_str("\n ");
            out.push_str(word);
            line_len = 1 + word.len();
        } else {
            out.push(' ');
            out.push_str(word);
            line_len += 1 + word.len();
        }
    }
    out
}
